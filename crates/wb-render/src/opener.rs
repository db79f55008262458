use std::io;
use std::path::Path;
use std::process::Command;

/// Ask the platform's default handler to open `path`. Does not wait for it.
pub fn open_in_default_app(path: &Path) -> io::Result<()> {
    if cfg!(target_os = "windows") {
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()?;
        return Ok(());
    }
    if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()?;
        return Ok(());
    }
    Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}
