use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

// Raw mode owns the terminal, so diagnostics go to a file instead of stdout.
lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

pub fn init() {
    let mut logger = LOGGER.lock().unwrap();
    if logger.is_none() {
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("vocab_debug.log")
        {
            *logger = Some(file);
        }
    }
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_mut() {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}
