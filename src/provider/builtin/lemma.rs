//! English lemmatizer: irregular forms plus suffix rules

/// Inflected forms that rules cannot derive
const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"),
    ("are", "be"),
    ("ate", "eat"),
    ("became", "become"),
    ("been", "be"),
    ("began", "begin"),
    ("begun", "begin"),
    ("being", "be"),
    ("best", "good"),
    ("better", "good"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("came", "come"),
    ("children", "child"),
    ("coming", "come"),
    ("did", "do"),
    ("does", "do"),
    ("doing", "do"),
    ("done", "do"),
    ("eaten", "eat"),
    ("feet", "foot"),
    ("felt", "feel"),
    ("found", "find"),
    ("gave", "give"),
    ("geese", "goose"),
    ("given", "give"),
    ("goes", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("had", "have"),
    ("has", "have"),
    ("having", "have"),
    ("is", "be"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("left", "leave"),
    ("made", "make"),
    ("making", "make"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("ran", "run"),
    ("said", "say"),
    ("saw", "see"),
    ("says", "say"),
    ("seen", "see"),
    ("taken", "take"),
    ("taking", "take"),
    ("teeth", "tooth"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("used", "use"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("women", "woman"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("written", "write"),
    ("wrote", "write"),
];

/// Words that look inflected but are not
const UNINFLECTED: &[&str] = &[
    "anything", "bring", "ceiling", "during", "evening", "everything", "king", "morning",
    "nothing", "red", "ring", "sing", "something", "spring", "string", "thing", "wing", "bed",
    "hundred", "naked", "sacred", "wicked", "news", "series", "species", "always", "perhaps",
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Lemma of an English word
///
/// Capitalized words outside the irregular table may be proper nouns
/// ("James", "Texas"). Only a possessive is stripped from them, keeping
/// their case; otherwise the result is `None` and the surface form is kept
/// upstream.
pub fn lemmatize(word: &str) -> Option<String> {
    let lower = word.to_lowercase();

    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == lower) {
        return Some((*lemma).to_string());
    }

    if lower != word {
        return strip_possessive(word);
    }

    apply_rules(&lower).or(Some(lower))
}

fn strip_possessive(word: &str) -> Option<String> {
    ["'s", "’s"]
        .iter()
        .find_map(|suffix| word.strip_suffix(*suffix))
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

fn apply_rules(word: &str) -> Option<String> {
    if !word.chars().all(|c| c.is_ascii_alphabetic() || c == '\'' || c == '’') {
        return None;
    }
    if UNINFLECTED.contains(&word) {
        return None;
    }

    if word.ends_with("'s") || word.ends_with("’s") {
        return strip_possessive(word);
    }

    let len = word.len();

    if len > 4 {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
    }
    if word.ends_with("sses") {
        return word.strip_suffix("es").map(str::to_string);
    }
    if len > 4 && ["xes", "ches", "shes", "zes"].iter().any(|s| word.ends_with(s)) {
        return word.strip_suffix("es").map(str::to_string);
    }
    if len > 3
        && word.ends_with('s')
        && !["ss", "us", "is", "ous"].iter().any(|s| word.ends_with(s))
    {
        return word.strip_suffix('s').map(str::to_string);
    }
    if len > 5 {
        if let Some(stem) = word.strip_suffix("ing") {
            return Some(restore(stem));
        }
    }
    if len > 4 && !word.ends_with("eed") {
        if let Some(stem) = word.strip_suffix("ed") {
            return Some(restore(stem));
        }
    }

    None
}

/// Repair a stem left behind by removing `-ing` or `-ed`
fn restore(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();

    // running -> run, stopped -> stop
    if let [.., a, b] = chars.as_slice() {
        if a == b && !is_vowel(*b) && !matches!(b, 'l' | 's' | 'z') {
            return chars[..chars.len() - 1].iter().collect();
        }
    }

    // created -> create, troubled -> trouble, realized -> realize
    if ["at", "bl", "iz"].iter().any(|s| stem.ends_with(s)) {
        return format!("{stem}e");
    }

    // believed -> believe
    if stem.ends_with('v') {
        return format!("{stem}e");
    }

    // hoping -> hope, liked -> like
    if let [c1, v, c2] = chars.as_slice() {
        if !is_vowel(*c1) && is_vowel(*v) && !is_vowel(*c2) && !matches!(c2, 'w' | 'x' | 'y') {
            return format!("{stem}e");
        }
    }

    stem.to_string()
}
