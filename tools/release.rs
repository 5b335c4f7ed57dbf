use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

fn confirm(message: &str) -> Result<bool, io::Error> {
    print!("{} (y/n): ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y")
}

fn run(cmd: &str, error_msg: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Executing: {}", cmd);
    let status = Command::new("sh").arg("-c").arg(cmd).status()?;
    if !status.success() {
        return Err(error_msg.to_string().into());
    }
    Ok(())
}

fn release_notes() -> Result<String, Box<dyn std::error::Error>> {
    // Commits since the last tag, or the full log if no tag exists yet
    let tag = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()?;

    let mut args = vec!["log".to_string(), "--pretty=format:- %s".to_string()];
    if tag.status.success() {
        let previous = String::from_utf8(tag.stdout)?.trim().to_string();
        println!("Previous tag: {}", previous);
        args.push(format!("{}..HEAD", previous));
    } else {
        println!("Previous tag: None");
    }

    let output = Command::new("git").args(&args).output()?;
    Ok(String::from_utf8(output.stdout)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cargo_content = fs::read_to_string("Cargo.toml")?;
    let mut doc = cargo_content.parse::<DocumentMut>()?;

    let current_version = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?;

    println!("Current version is: {}", current_version);
    println!("Enter new version:");
    let mut new_version = String::new();
    io::stdin().read_line(&mut new_version)?;
    let new_version = new_version.trim();

    if new_version.is_empty() {
        return Err("Version cannot be empty".into());
    }

    if !confirm(&format!("Ready to release version {}?", new_version))? {
        println!("Release aborted.");
        return Ok(());
    }

    doc["package"]["version"] = Item::from(new_version);
    fs::write("Cargo.toml", doc.to_string())?;
    println!("Updated Cargo.toml with new version: {}", new_version);

    // Refresh Cargo.lock so the bump lands in the same commit
    run("cargo check", "Failed to update Cargo.lock")?;

    let notes = release_notes()?;
    if notes.is_empty() {
        if !confirm("No commits since last tag; continue with empty release notes?")? {
            println!("Release aborted.");
            return Ok(());
        }
    } else {
        println!("Release notes:\n{}", notes);
    }

    run("git add Cargo.toml Cargo.lock", "Failed to stage version bump")?;
    run(
        &format!("git commit -m \"Bump version to {}\"", new_version),
        "Failed to commit version bump",
    )?;
    run(
        &format!("git tag -a v{} -m \"Version {}\"", new_version, new_version),
        "Failed to create tag",
    )?;
    run("git push && git push --tags", "Failed to push")?;

    if confirm("Publish to crates.io?")? {
        run("cargo publish", "Failed to publish to crates.io")?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    println!("Successfully released version {}", new_version);
    Ok(())
}
