use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wordlens::convenience::{analyze, analyze_with};
use wordlens::*;

const EN_MODEL: &str = r#"{
    "language": "en",
    "vectors": {
        "happy": [1.0, 0.0],
        "glad": [0.95, 0.05],
        "cheerful": [0.9, 0.2],
        "sad": [0.0, 1.0]
    }
}"#;

fn write_model(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn alternatives_only() -> Switches {
    Switches {
        alternatives: true,
        ..Switches::default()
    }
}

/// Neighbour words listed under "Alternatives for <word>:"
fn listed_alternatives(output: &str, word: &str) -> Vec<String> {
    let header = format!("Alternatives for {}:", word);
    output
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .map_while(|line| line.strip_prefix("- "))
        .map(|line| line.split(" (Similarity: ").next().unwrap().to_string())
        .collect()
}

fn provider_with_models(dir: &Path) -> BuiltinProvider {
    BuiltinProvider::new()
        .unwrap()
        .with_embeddings(load_models(dir).unwrap())
}

#[test]
fn test_alternatives_with_model() {
    let models = TempDir::new().unwrap();
    write_model(models.path(), "en.json", EN_MODEL);
    let provider = provider_with_models(models.path());

    let config = AnalysisConfig::new(alternatives_only(), Settings::default());
    let output = analyze_with(&provider, ["the", "dog", "is", "happy"], config);

    assert!(output.starts_with("the dog is happy\n"));
    assert_eq!(listed_alternatives(&output, "happy"), vec!["glad", "cheerful"]);
    // Lemmas are looked up, not surface forms
    assert!(output.contains("Alternatives for be:\n"));
    assert!(!output.contains("- sad"));
}

#[test]
fn test_alternatives_respect_maximum_and_threshold() {
    let models = TempDir::new().unwrap();
    write_model(models.path(), "en.json", EN_MODEL);
    let provider = provider_with_models(models.path());
    let words = ["the", "dog", "is", "happy"];

    let capped = AnalysisConfig::new(
        alternatives_only(),
        Settings::default().with_overrides(Some(1), None),
    );
    assert_eq!(
        listed_alternatives(&analyze_with(&provider, words, capped), "happy"),
        vec!["glad"]
    );

    let strict = AnalysisConfig::new(
        alternatives_only(),
        Settings::default().with_overrides(None, Some(0.99)),
    );
    assert_eq!(
        listed_alternatives(&analyze_with(&provider, words, strict), "happy"),
        vec!["glad"]
    );

    let loose = AnalysisConfig::new(
        alternatives_only(),
        Settings::default().with_overrides(None, Some(-1.0)),
    );
    assert_eq!(
        listed_alternatives(&analyze_with(&provider, words, loose), "happy"),
        vec!["glad", "cheerful", "sad"]
    );
}

#[test]
fn test_alternatives_without_model_for_language() {
    let output = analyze(["the", "dog", "is", "happy"], alternatives_only()).unwrap();
    assert!(output.contains(
        "Alternatives for happy:\nNo word embedding available for language en\n"
    ));
}

#[test]
fn test_short_input_without_stop_words_is_lemmatized() {
    let switches = Switches {
        lemmatize: true,
        ..Switches::default()
    };
    assert_eq!(
        analyze(["cats", "running"], switches).unwrap(),
        "cats running\nLemmas: cat and run\n"
    );
}

#[test]
fn test_alternatives_use_lemmas_for_undetermined_text() {
    let models = TempDir::new().unwrap();
    write_model(
        models.path(),
        "xx.json",
        r#"{"language": "xx", "vectors": {"cat": [1.0, 0.0], "kitten": [0.99, 0.1]}}"#,
    );
    let provider = provider_with_models(models.path());
    let config = AnalysisConfig::new(alternatives_only(), Settings::default());

    let output = analyze_with(&provider, ["cats", "running"], config);
    assert_eq!(
        output,
        "cats running\n\
         Alternatives for cat:\n\
         No word embedding available for language und\n\
         Alternatives for run:\n\
         No word embedding available for language und\n"
    );
}

#[test]
fn test_proper_nouns_keep_their_form() {
    let switches = Switches {
        lemmatize: true,
        ..Switches::default()
    };
    assert_eq!(
        analyze(["James", "visited", "Texas", "and", "London's", "parks"], switches).unwrap(),
        "James visited Texas and London's parks\n\
         Lemmas: James, visit, Texas, and, London, and park\n"
    );
}

#[test]
fn test_names_switch_alone_prints_empty_section() {
    let switches = Switches {
        names: true,
        ..Switches::default()
    };
    let output = analyze(["Paris", "is", "lovely"], switches).unwrap();
    assert_eq!(output, "Paris is lovely\nFound the following entities:\n");
}

#[test]
fn test_entity_categories_are_gated() {
    let gazetteer = Gazetteer {
        people: vec!["Ada Lovelace".to_string()],
        organizations: vec!["Initech".to_string()],
        ..Gazetteer::default()
    };
    let provider = BuiltinProvider::new().unwrap().with_gazetteer(&gazetteer);
    let words = ["Ada", "Lovelace", "met", "Initech", "staff", "in", "Paris"];

    let all = AnalysisConfig::new(
        Switches {
            person: true,
            place: true,
            organization: true,
            ..Switches::default()
        },
        Settings::default(),
    );
    assert_eq!(
        analyze_with(&provider, words, all),
        "Ada Lovelace met Initech staff in Paris\n\
         Found the following entities:\n\
         Person: Ada Lovelace\n\
         Organization: Initech\n\
         Place: Paris\n"
    );

    let people_only = AnalysisConfig::new(
        Switches {
            person: true,
            ..Switches::default()
        },
        Settings::default(),
    );
    assert_eq!(
        analyze_with(&provider, words, people_only),
        "Ada Lovelace met Initech staff in Paris\n\
         Found the following entities:\n\
         Person: Ada Lovelace\n"
    );
}

#[test]
fn test_everything_matches_all_switches() {
    let every_flag = Switches {
        detect_language: true,
        sentiment_analysis: true,
        lemmatize: true,
        alternatives: true,
        names: true,
        person: true,
        place: true,
        organization: true,
        everything: false,
    };
    let words = ["The", "cats", "were", "happy", "in", "Paris"];

    assert_eq!(
        analyze(words, Switches::everything()).unwrap(),
        analyze(words, every_flag).unwrap()
    );
}

#[test]
fn test_section_order() {
    let output = analyze(["I", "love", "Paris"], Switches::everything()).unwrap();
    let positions: Vec<usize> = [
        "I love Paris\n",
        "Detected language: ",
        "Sentiment analysis: ",
        "Lemmas: ",
        "Alternatives for ",
        "Found the following entities:",
    ]
    .iter()
    .map(|marker| output.find(marker).unwrap())
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_undetermined_language() {
    let switches = Switches {
        detect_language: true,
        ..Switches::default()
    };
    let output = analyze(["xyzzy", "plugh"], switches).unwrap();
    assert_eq!(output, "xyzzy plugh\nDetected language: und\n");
}

#[test]
fn test_config_file_precedence() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wordlens.yaml");
    fs::write(&path, "maximum_alternatives: 4\nfar_away: 0.5\n").unwrap();

    let file = ConfigFile::load(&path).unwrap();
    let from_file = file.settings();
    assert_eq!(from_file.maximum_alternatives, 4);
    assert_eq!(from_file.far_away, 0.5);

    let from_cli = from_file.with_overrides(Some(2), None);
    assert_eq!(from_cli.maximum_alternatives, 2);
    assert_eq!(from_cli.far_away, 0.5);

    let defaults = ConfigFile::default().settings();
    assert_eq!(defaults, Settings::default());
    assert_eq!(defaults.maximum_alternatives, 10);
    assert_eq!(defaults.far_away, 0.8);
}

#[test]
fn test_config_embeddings_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("models")).unwrap();
    write_model(&dir.path().join("models"), "en.json", EN_MODEL);
    let path = dir.path().join("wordlens.yaml");
    fs::write(&path, "embeddings: models\n").unwrap();

    let file = ConfigFile::load(&path).unwrap();
    let store = load_models(file.embeddings_dir().unwrap()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get(&Language::new("en")).is_some());
}

#[test]
fn test_malformed_model_is_an_error() {
    let models = TempDir::new().unwrap();
    write_model(models.path(), "en.json", EN_MODEL);
    write_model(
        models.path(),
        "ragged.json",
        r#"{"language": "fr", "vectors": {"chat": [1.0, 0.0], "chien": [1.0]}}"#,
    );

    let err = load_models(models.path()).unwrap_err();
    assert!(matches!(err, WordLensError::InvalidEmbedding { .. }));
    assert!(err.to_string().contains("ragged.json"));
}
