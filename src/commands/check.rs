//! Check command implementation
//!
//! The validation pass:
//! 1. Parse the free-form app list and apply the selection policy
//! 2. Surface selection warnings (ambiguities, dropped paths)
//! 3. Validate scalar ranges and every configured path against the filesystem
//! 4. Align expansion file entries with the selected apps
//! 5. Print the resolved upload plan
//!
//! Warnings never fail the run; the first hard validation failure aborts it.

use console::Style;

use crate::cli::CheckArgs;
use crate::config::{CheckConfig, UploadPlan};
use crate::error::Result;

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    let json = args.json;
    let config = CheckConfig::from(args);

    let selection = config.app_selection();
    for warning in &selection.warnings {
        eprintln!(
            "{} {}",
            Style::new().bold().yellow().apply_to("Warning:"),
            warning
        );
    }

    let plan = config.validate(selection)?;

    if json {
        print_plan_json(&plan)?;
    } else {
        print_plan(&plan);
    }

    Ok(())
}

fn print_plan_json(plan: &UploadPlan) -> Result<()> {
    // UploadPlan serialization cannot fail (no maps, no non-string keys)
    if let Ok(rendered) = serde_json::to_string_pretty(plan) {
        println!("{}", rendered);
    }
    Ok(())
}

fn print_plan(plan: &UploadPlan) {
    let label = Style::new().bold();

    println!("{}", Style::new().bold().green().apply_to("Upload plan"));
    println!("  {} {}", label.apply_to("Package:"), plan.package_name);
    println!("  {} {}", label.apply_to("Track:"), plan.track);

    println!("  {}", label.apply_to("Apps:"));
    for (i, app) in plan.apps.iter().enumerate() {
        if let Some(expansion) = plan
            .expansion_files
            .get(i)
            .filter(|entry| !entry.is_empty())
        {
            println!("    {} (expansion: {})", app, expansion);
        } else {
            println!("    {}", app);
        }
    }

    if let Some(fraction) = plan.user_fraction {
        println!("  {} {}", label.apply_to("User fraction:"), fraction);
    }
    println!(
        "  {} {}",
        label.apply_to("Update priority:"),
        plan.update_priority
    );
    if let Some(ref dir) = plan.whatsnews_dir {
        println!("  {} {}", label.apply_to("What's new:"), dir);
    }
    if let Some(ref mapping) = plan.mapping_file {
        println!("  {} {}", label.apply_to("Mapping file:"), mapping);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(app_path: &str) -> CheckArgs {
        CheckArgs {
            service_account_json_key_path: "secret".to_string(),
            package_name: "com.example.app".to_string(),
            app_path: app_path.to_string(),
            expansionfile_path: None,
            track: "internal".to_string(),
            user_fraction: None,
            update_priority: 0,
            whatsnews_dir: None,
            mapping_file: None,
            json: false,
        }
    }

    #[test]
    fn test_run_success() {
        let temp = TempDir::new().unwrap();
        let aab = temp.path().join("app.aab");
        fs::write(&aab, b"x").unwrap();

        let args = args_for(&aab.to_string_lossy());
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_run_missing_app() {
        let temp = TempDir::new().unwrap();
        let args = args_for(&temp.path().join("ghost.apk").to_string_lossy());
        assert!(run(args).is_err());
    }

    #[test]
    fn test_run_json_output() {
        let temp = TempDir::new().unwrap();
        let aab = temp.path().join("app.aab");
        fs::write(&aab, b"x").unwrap();

        let mut args = args_for(&aab.to_string_lossy());
        args.json = true;
        assert!(run(args).is_ok());
    }
}
