use std::path::PathBuf;

/// Platform file name of the Java launcher binary.
pub fn java_exe() -> &'static str {
    if cfg!(target_os = "windows") {
        "java.exe"
    } else {
        "java"
    }
}

/// Resolve the Java binary used for the installer and the game.
///
/// Order: explicit `CRAFTIUM_JAVA`, then `JAVA_HOME/bin/java`, then plain
/// `java` resolved through `PATH` at spawn time.
pub fn resolve_java_binary<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = lookup("CRAFTIUM_JAVA").filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(explicit);
    }

    if let Some(home) = lookup("JAVA_HOME").filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(home).join("bin").join(java_exe());
    }

    PathBuf::from(java_exe())
}
