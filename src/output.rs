use serde::Serialize;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `VARCITE_QUIET=1` suppresses the human-readable summary
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("VARCITE_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }

    pub fn is_human(self) -> bool {
        self == Self::Human
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    command: &'a str,
    ok: bool,
    data: &'a T,
}

pub fn render_success<T: Serialize>(command: &str, data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope {
        command,
        ok: true,
        data,
    })
}

/// Print a JSON success envelope on stdout
pub fn emit_success<T: Serialize>(command: &str, data: &T) -> anyhow::Result<()> {
    println!("{}", render_success(command, data)?);
    Ok(())
}
