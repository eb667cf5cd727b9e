use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use userscope::analysis::{process_user_data, UserAnalysisReport, UserFilter};
use userscope::models::Role;
use userscope::store::seed;

#[derive(Parser)]
#[command(name = "userscope-report")]
#[command(about = "Userscope analytics report CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the built-in demo records
    Sample,
    /// Analyze randomly generated records
    Generate {
        /// Number of records to generate
        #[arg(long, default_value_t = 100)]
        count: usize,
        /// Only include users with this role (USER or ADMIN)
        #[arg(long)]
        role: Option<String>,
        /// Only include users with this enabled state
        #[arg(long)]
        active: Option<bool>,
        /// Only include users whose email domain matches (case-insensitive)
        #[arg(long)]
        email_domain: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample => {
            let users = seed::sample_users();
            let report = process_user_data(&users, None)?;
            print_report(&report);
        }
        Commands::Generate {
            count,
            role,
            active,
            email_domain,
        } => {
            let role = match role.as_deref() {
                None => None,
                Some(value) => match value.to_ascii_uppercase().as_str() {
                    "USER" => Some(Role::User),
                    "ADMIN" => Some(Role::Admin),
                    other => bail!("unknown role '{}', expected USER or ADMIN", other),
                },
            };
            let filter = UserFilter {
                role,
                active,
                email_domain,
            };
            let users = seed::random_users(count);
            let report = process_user_data(&users, Some(&filter))?;
            print_report(&report);
        }
    }

    Ok(())
}

fn print_report(report: &UserAnalysisReport) {
    println!("Total users: {}", report.total_users);
    println!("Active users: {}", report.active_users);
    println!("Inactive users: {}", report.inactive_users);

    println!("Role distribution:");
    for (role, percentage) in &report.role_distribution {
        println!("  {:?}: {:.1}%", role, percentage);
    }

    println!("Top email domains: {:?}", report.top_email_domains);

    println!("Users created per month:");
    for (month, count) in &report.creation_by_month {
        println!("  {}: {}", month, count);
    }

    println!("Recent users (last 30 days): {}", report.recent_users);
    println!("Average name length: {:.1}", report.average_name_length);

    if report.potential_issues.is_empty() {
        println!("Potential issues: none");
    } else {
        println!("Potential issues:");
        for issue in &report.potential_issues {
            println!("  - {}", issue);
        }
    }
}
