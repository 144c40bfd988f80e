//! Built-in function and system variable names of the Tasmota script runtime.
//!
//! None of these may be handed out as a short name.

pub const RESERVED_WORDS: &[&str] = &[
    "abs", "acos", "acp", "adc", "af", "asc",
    "boot", "bt", "bu",
    "c2ps", "cbs", "chg", "core", "cos",
    "day", "dvnm",
    "enrg", "epoch", "epoffs", "eres",
    "freq", "frnm",
    "ghum", "gjp", "gprs", "gtmp", "gtopic", "gwr",
    "hd", "heap", "hf", "hn", "hours", "http", "hx",
    "ia", "ins", "int", "ir", "is", "is1",
    "knx",
    "lip", "loglvl", "luip",
    "med", "micros", "millis", "mins", "month", "mpt", "mqttc", "mqttd", "mqtts",
    "npwr",
    "pc", "pd", "pheap", "pin", "pl", "pn", "pow", "prefixn", "pwmN", "pwr",
    "ram", "rapp", "rec", "rnd", "rr",
    "s", "s2hms", "sa", "say", "sb", "sc", "secs", "sf", "sht", "sin", "sl", "slen", "slp",
    "sml", "smlj", "smls", "smlv", "smw", "so", "sp", "spi", "sqrt", "sr", "sra", "srb",
    "st", "stack", "sunrise", "sunset", "sw", "swa", "swb",
    "tbut", "time", "tinit", "topic", "tper", "tset", "tstamp", "ttget",
    "upd", "upsecs", "uptime",
    "wbut", "wcf", "wcs", "wday", "wdclk", "wfs", "wific", "wifid", "wifis", "wm", "wtch",
    "year",
];

/// True if `name` is a runtime built-in.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.binary_search(&name).is_ok()
}
