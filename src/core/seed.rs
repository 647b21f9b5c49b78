use crate::domain::model::{
    CategorySeed, COGNITIVE, NEGATIVE_EMOTION, POSITIVE_EMOTION, SOCIAL,
};

const POSITIVE_EMOTION_WORDS: &[&str] = &[
    "happy", "joy", "love", "excited", "content", "pleased", "grateful", "hopeful", "proud",
    "amused", "cheerful", "delighted", "optimistic", "enthusiastic", "satisfied", "blissful",
    "ecstatic", "gleeful", "jubilant", "merry", "radiant", "thrilled", "upbeat", "vivacious",
    "zestful", "buoyant", "elated", "exhilarated", "lighthearted", "overjoyed", "rapturous",
    "triumphant", "euphoric", "exultant", "festive", "jolly", "jovial", "mirthful", "peppy",
    "perky", "playful", "sparkling", "sunny", "vibrant", "whimsical", "winsome", "zany",
    "carefree", "ebullient", "effervescent", "exuberant",
];

const NEGATIVE_EMOTION_WORDS: &[&str] = &[
    "sad", "angry", "fear", "anxious", "depressed", "frustrated", "worried", "upset",
    "disappointed", "guilty", "ashamed", "lonely", "miserable", "gloomy", "desperate",
    "hopeless", "bitter", "resentful", "irritated", "enraged", "furious", "aggravated",
    "annoyed", "disgruntled", "displeased", "exasperated", "incensed", "indignant", "outraged",
    "vexed", "apprehensive", "dreadful", "frightened", "panicked", "petrified", "terrified",
    "alarmed", "shocked", "horrified", "dismayed", "distressed", "grieved", "heartbroken",
    "melancholy", "mournful", "sorrowful", "woeful", "despondent", "disheartened", "forlorn",
    "pessimistic",
];

// "co-worker" can never match: the tokenizer splits on the hyphen.
const SOCIAL_WORDS: &[&str] = &[
    "friend", "family", "team", "community", "partner", "colleague", "neighbor",
    "acquaintance", "ally", "companion", "confidant", "mate", "peer", "supporter", "advocate",
    "backer", "benefactor", "comrade", "crony", "pal", "associate", "collaborator", "co-worker",
    "classmate", "roommate", "playmate", "soulmate", "spouse", "sibling", "parent", "child",
    "relative", "kin", "clan", "tribe", "group", "club", "society", "organization", "network",
    "circle", "crew", "gang", "posse", "squad", "unit", "band", "troop", "assembly",
    "congregation", "gathering",
];

const COGNITIVE_WORDS: &[&str] = &[
    "think", "know", "believe", "understand", "realize", "consider", "contemplate", "ponder",
    "reflect", "analyze", "evaluate", "assess", "judge", "decide", "conclude", "deduce", "infer",
    "reason", "rationalize", "speculate", "hypothesize", "theorize", "postulate", "conjecture",
    "surmise", "guess", "estimate", "calculate", "compute", "measure", "quantify", "qualify",
    "compare", "contrast", "differentiate", "distinguish", "identify", "recognize", "recall",
    "remember", "recollect", "retrieve", "forget", "ignore", "overlook", "neglect",
    "misunderstand", "confuse", "bewilder", "perplex", "puzzle",
];

/// Built-in lexicon used when no `[[lexicon.category]]` tables are configured.
pub fn default_seed() -> Vec<CategorySeed> {
    vec![
        CategorySeed::new(POSITIVE_EMOTION, POSITIVE_EMOTION_WORDS.iter().copied()),
        CategorySeed::new(NEGATIVE_EMOTION, NEGATIVE_EMOTION_WORDS.iter().copied()),
        CategorySeed::new(SOCIAL, SOCIAL_WORDS.iter().copied()),
        CategorySeed::new(COGNITIVE, COGNITIVE_WORDS.iter().copied()),
    ]
}
