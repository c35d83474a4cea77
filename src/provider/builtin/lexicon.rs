//! Gazetteers and closed word lists for the name tagger

pub const ORGANIZATIONS: &[&str] = &[
    "amazon",
    "apple",
    "bbc",
    "boeing",
    "cnn",
    "european union",
    "facebook",
    "fifa",
    "ford",
    "google",
    "harvard",
    "ibm",
    "intel",
    "interpol",
    "microsoft",
    "mit",
    "nasa",
    "nato",
    "netflix",
    "new york times",
    "nike",
    "nintendo",
    "oxford university",
    "red cross",
    "reuters",
    "samsung",
    "siemens",
    "sony",
    "stanford",
    "tesla",
    "toyota",
    "twitter",
    "unesco",
    "unicef",
    "united nations",
    "volkswagen",
    "wikipedia",
    "world bank",
    "world health organization",
    "yale",
];

pub const PLACES: &[&str] = &[
    "africa",
    "amsterdam",
    "antarctica",
    "argentina",
    "asia",
    "athens",
    "australia",
    "austria",
    "barcelona",
    "beijing",
    "belgium",
    "berlin",
    "boston",
    "brazil",
    "brussels",
    "buenos aires",
    "california",
    "canada",
    "chicago",
    "china",
    "cupertino",
    "denmark",
    "dublin",
    "egypt",
    "england",
    "europe",
    "finland",
    "florida",
    "france",
    "geneva",
    "germany",
    "greece",
    "hong kong",
    "india",
    "ireland",
    "istanbul",
    "italy",
    "japan",
    "kenya",
    "lisbon",
    "london",
    "los angeles",
    "madrid",
    "mexico",
    "milan",
    "moscow",
    "mumbai",
    "munich",
    "netherlands",
    "new york",
    "new zealand",
    "nigeria",
    "north america",
    "norway",
    "paris",
    "poland",
    "portugal",
    "prague",
    "rio de janeiro",
    "rome",
    "russia",
    "san francisco",
    "scotland",
    "seattle",
    "seoul",
    "shanghai",
    "singapore",
    "south africa",
    "south america",
    "spain",
    "stockholm",
    "sweden",
    "switzerland",
    "sydney",
    "texas",
    "tokyo",
    "toronto",
    "united kingdom",
    "united states",
    "vienna",
    "wales",
    "washington",
    "zurich",
];

pub const GIVEN_NAMES: &[&str] = &[
    "ada", "adam", "alan", "albert", "alice", "amelia", "anna", "barack", "ben", "bill",
    "charles", "charlotte", "chris", "daniel", "david", "elizabeth", "emily", "emma", "frank",
    "george", "grace", "hannah", "harry", "helen", "henry", "isaac", "jack", "james", "jane",
    "jennifer", "john", "joseph", "julia", "karen", "kate", "laura", "linda", "lisa", "lucy",
    "maria", "marie", "mark", "martin", "mary", "michael", "nancy", "olivia", "paul", "peter",
    "rachel", "richard", "robert", "sarah", "sophie", "steve", "susan", "thomas", "tim", "tom",
    "victoria", "william",
];

/// Final words that mark an organization
pub const ORGANIZATION_SUFFIXES: &[&str] = &[
    "agency", "association", "bank", "corp", "corporation", "company", "college", "foundation",
    "group", "inc", "institute", "llc", "ltd", "ministry", "plc", "society", "university",
];

/// Leading words that mark an organization
pub const ORGANIZATION_HEADS: &[&str] = &[
    "bank", "college", "department", "institute", "ministry", "university",
];

/// Personal titles; a following name is a person
pub const TITLES: &[&str] = &[
    "dr", "lady", "lord", "miss", "mr", "mrs", "ms", "president", "prof", "professor", "queen",
    "king", "sir", "st",
];

/// Lowercase words allowed inside a multi-word name
pub const CONNECTORS: &[&str] = &["de", "del", "der", "du", "la", "of", "van", "von"];

/// Leading words dropped from a name
pub const DETERMINERS: &[&str] = &["a", "an", "the"];
