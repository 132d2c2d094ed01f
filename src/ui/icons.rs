pub struct Icons;

impl Icons {
    pub const DNA: &str = "🧬";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const FILE: &str = "📄";
    pub const DATABASE: &str = "🗄️";
    pub const STATS: &str = "📊";
    pub const CLOCK: &str = "⏱️";
}
