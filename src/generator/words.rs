use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Seed for the product-name source. Fixed so product sequences repeat across runs.
pub const PRODUCT_SEED: u64 = 42;

const WORDS: &[&str] = &[
    "able", "account", "activity", "address", "agency", "agent", "air", "amount", "analysis", "animal",
    "answer", "area", "argue", "article", "artist", "attack", "audience", "author", "baby", "bag",
    "ball", "bank", "bar", "bed", "behavior", "bill", "bit", "blood", "blue", "board",
    "body", "book", "box", "budget", "building", "business", "camera", "campaign", "car", "card",
    "career", "carry", "catch", "cell", "center", "chair", "chance", "child", "choice", "church",
    "citizen", "city", "class", "coach", "color", "company", "computer", "condition", "cost", "country",
    "course", "court", "crime", "culture", "cup", "customer", "data", "deal", "debate", "decade",
    "degree", "design", "detail", "device", "dinner", "doctor", "dog", "door", "dream", "drive",
    "edge", "effect", "energy", "engine", "event", "evidence", "eye", "face", "fact", "family",
    "field", "figure", "film", "fire", "floor", "flower", "focus", "food", "force", "friend",
    "game", "garden", "glass", "goal", "ground", "group", "growth", "gun", "hair", "hand",
    "heart", "history", "home", "hospital", "hotel", "house", "idea", "image", "industry", "item",
    "job", "kitchen", "land", "language", "law", "leader", "letter", "light", "line", "list",
    "machine", "magazine", "market", "material", "media", "meeting", "memory", "message", "method", "minute",
    "model", "money", "morning", "mouth", "movie", "music", "nature", "network", "news", "note",
    "office", "oil", "order", "page", "painting", "paper", "party", "pattern", "phone", "picture",
    "piece", "plant", "player", "police", "policy", "power", "press", "price", "product", "program",
    "project", "radio", "record", "region", "report", "road", "rock", "room", "rule", "school",
    "science", "scene", "season", "seat", "series", "shoulder", "side", "sign", "skill", "society",
    "song", "sound", "space", "sport", "staff", "stage", "star", "station", "stock", "store",
    "story", "student", "style", "system", "table", "teacher", "television", "test", "theory", "thing",
    "tool", "town", "trade", "tree", "truth", "unit", "voice", "wall", "watch", "water",
    "weapon", "window", "wind", "woman", "word", "world", "writer", "yard", "year", "youth"
];

/// A reproducible source of short single-word product names.
pub struct WordSource {
    rng: StdRng
}

impl WordSource {
    pub fn new() -> Self {
        Self::with_seed(PRODUCT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed)
        }
    }

    pub fn next_word(&mut self) -> &'static str {
        WORDS.choose(&mut self.rng).copied().unwrap_or("product")
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::new()
    }
}
