use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        // Errors always reach the log, even on a silent bus
        if self.silent_mode {
            if let AppEvent::Error { context, error } = event {
                tracing::error!("{}: {}", context, error);
            }
            return;
        }

        match event {
            // Application lifecycle
            AppEvent::Starting => {
                println!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
                println!("  {}", "Backup Sweeper".white().bold());
                println!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan());
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black());
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                println!("  {} {}", "Loading config".dimmed(), path.cyan());
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    println!("  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    );
                }
            }
            AppEvent::ConfigLoaded { directory, bucket } => {
                println!("  {} {} → {}", "✓".green(), directory.cyan(), bucket.cyan());
            }

            // Storage
            AppEvent::StorageReady { backend, location, remote } => {
                let scope = if remote { "remote" } else { "local" };
                println!("  {} {} storage ({}) {}", "✓".green(), backend, scope, location.dimmed());
            }

            // Sweep
            AppEvent::SweepStarted { directory, date_stamp } => {
                println!("  {} Sweeping {} for {}", "→".dimmed(), directory.cyan(), date_stamp.yellow());
            }
            AppEvent::FileUploaded { file, location } => {
                println!("  {} {} {}", "↑".green(), file.cyan(), location.dimmed());
            }
            AppEvent::FileDeleted { file } => {
                println!("  {} {}", "-".red(), file.dimmed());
            }
            AppEvent::EntrySkipped { .. } => {
                // Silent - logged at debug level by the filesystem layer
            }
            AppEvent::SweepCompleted { uploaded, deleted, duration } => {
                println!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
                println!("  {} {}", "Uploaded".white(), uploaded.to_string().cyan());
                println!("  {} {}", "Deleted ".white(), deleted.to_string().cyan());
                println!("  {} {:.2?}", "Took    ".white(), duration);
                println!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green());
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
