use dispatch_command::error::CommandError;
use dispatch_command::guard::is_command;
use dispatch_command::manifest::CommandManifest;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = r#"[
        { "name": "ping", "run": "handlers::ping" },
        { "name": "purge", "run": "moderation::purge", "allowedRoles": ["123", "456"] },
        { "run": "handlers::anonymous" },
        42
    ]"#;
    let candidates: Vec<serde_json::Value> = serde_json::from_str(raw)?;

    for candidate in &candidates {
        println!("{candidate} -> is_command={}", is_command(candidate));
    }

    // 守卫通过后再取类型化元数据
    for candidate in &candidates {
        match CommandManifest::from_value(candidate) {
            Ok(manifest) => println!(
                "registered /{} (roles: {:?})",
                manifest.name(),
                manifest.allowed_roles
            ),
            Err(CommandError::MissingProperty(p)) => eprintln!("rejected: missing `{p}`"),
            Err(err) => eprintln!("rejected: {err}"),
        }
    }
    Ok(())
}
