pub(crate) const GREEN_CHECK: &str = "\x1b[32m✔\x1b[0m";
pub(crate) const RED_X: &str = "\x1b[31m✘\x1b[0m";
pub(crate) const YELLOW_WARNING: &str = "\x1b[33m⚠\x1b[0m";
