pub mod chunker;
pub mod config;
pub mod drawtext;
pub mod init;
pub mod pipeline;
pub mod srt;
pub mod transcript;

pub(crate) fn logv(tag: &str, message: &str) {
    eprintln!("[{}] {}", tag, message);
}

pub(crate) fn logi(message: impl AsRef<str>) {
    logv("INFO", message.as_ref());
}

pub(crate) fn logok(message: impl AsRef<str>) {
    logv("OK", message.as_ref());
}

pub(crate) fn logw(message: impl AsRef<str>) {
    logv("WARN", message.as_ref());
}

pub fn logerr(message: impl AsRef<str>) {
    logv("ERROR", message.as_ref());
}
