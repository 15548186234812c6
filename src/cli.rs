use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use gt_application::prelude::*;
use gt_core::{
    db::Db,
    entities::{DayKey, Timestamp},
    gateways::identity::IdentityGateway,
    usecases,
};
use gt_db_mem::MemDb;

use crate::{config::Config, gateways::EnvIdentity, view};

/// Number of days the day picker shows, today included.
const DAY_PICKER_LEN: usize = 6;

#[derive(Debug, Parser)]
#[command(
    name = "gratitree",
    version,
    about = "Daily gratitude trees from the command line"
)]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the JSON store snapshot (overrides the config file)
    #[arg(long, value_name = "FILE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the recent days and whether they still accept entries
    Days,
    /// Render a day's tree
    Show {
        /// Day key (YYYY-MM-DD); invalid or absent means today
        #[arg(long, value_name = "DAY")]
        day: Option<String>,
    },
    /// Add an entry to a day's tree
    Submit {
        /// The entry text (at most 120 characters)
        #[arg(long)]
        text: String,
        /// Day key (YYYY-MM-DD); invalid or absent means today
        #[arg(long, value_name = "DAY")]
        day: Option<String>,
        /// Display name shown next to the entry
        #[arg(long)]
        name: Option<String>,
        /// Post under the fixed anonymous label
        #[arg(long)]
        anonymous: bool,
        /// Id of the entry to reply to
        #[arg(long, value_name = "ID")]
        parent: Option<String>,
    },
    /// Show the signed-in identity, claims included
    Whoami,
    /// Pre-create day records for the upcoming week (admin only)
    Provision {
        #[arg(long, default_value_t = usecases::PROVISION_DAYS)]
        days: usize,
    },
    /// End the session
    SignOut,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let store_path = args.store.unwrap_or_else(|| config.store.path.clone());
    let db = MemDb::open(&store_path)?;
    let identity_gateway = EnvIdentity::from_config(&config.identity);
    let now = Timestamp::now();

    match args.command {
        Command::Days => days(&db, now),
        Command::Show { day } => show(&db, &identity_gateway, day.as_deref(), now),
        Command::Submit {
            text,
            day,
            name,
            anonymous,
            parent,
        } => {
            let draft = EntryDraft {
                text,
                display_name: name,
                anonymous,
                parent: parent.map(Into::into),
            };
            submit(&db, &store_path, &identity_gateway, day.as_deref(), draft, now)
        }
        Command::Whoami => whoami(&identity_gateway),
        Command::Provision { days } => provision(&db, &store_path, &identity_gateway, days, now),
        Command::SignOut => {
            sign_out(&identity_gateway)?;
            println!("Signed out.");
            Ok(())
        }
    }
}

/// Accepts `YYYY-MM-DD`; anything else falls back to today, like the
/// web app treats its `?day=` parameter.
fn day_or_today(arg: Option<&str>, now: Timestamp) -> DayKey {
    match arg {
        Some(raw) => match raw.parse() {
            Ok(day) => day,
            Err(err) => {
                log::warn!("Ignoring invalid day key {raw:?} ({err}); showing today");
                usecases::day_key(now)
            }
        },
        None => usecases::day_key(now),
    }
}

fn days<D: Db>(db: &D, now: Timestamp) -> Result<()> {
    for (i, key) in usecases::recent_days(now, DAY_PICKER_LEN).iter().enumerate() {
        let status = if usecases::is_open(key, now) {
            "open"
        } else {
            "locked"
        };
        // Days created ahead of time carry a persisted lock deadline.
        let provisioned = if db.get_day(key).is_ok() {
            "  (provisioned)"
        } else {
            ""
        };
        println!(
            "{key}  {:<12}  {status}{provisioned}",
            view::day_label(key, i == 0)
        );
    }
    Ok(())
}

fn show<G: IdentityGateway>(db: &MemDb, gateway: &G, day: Option<&str>, now: Timestamp) -> Result<()> {
    let identity = gateway.current_identity()?;
    let day = day_or_today(day, now);
    let mut live = LiveView::new();
    let mode = live.switch_day(db, db, identity.as_ref(), day, now)?;
    println!(
        "{}",
        view::day_banner(&day, matches!(mode, DayMode::Open { .. }))
    );
    match mode {
        DayMode::Open {
            own_count,
            at_limit,
        } => match own_count {
            Some(count) => {
                println!(
                    "You have added {count} of {} entries today.",
                    usecases::MAX_ENTRIES_PER_DAY
                );
                if at_limit {
                    println!("That's the daily limit; the tree unlocks for reading at midnight.");
                }
                let state = live.state();
                let state = state.borrow();
                if !state.reply_options.is_empty() {
                    println!();
                    println!("Your entries so far (usable as --parent targets):");
                    for line in view::reply_option_lines(&state.reply_options) {
                        println!("{line}");
                    }
                }
            }
            None => println!("Configure an identity to add entries."),
        },
        DayMode::Locked => {
            let state = live.state();
            let state = state.borrow();
            if let Some(err) = &state.error {
                println!("Could not load tree: {err}");
            } else if state.forest.is_empty() {
                println!("No entries were added this day.");
            } else {
                for line in view::forest_lines(&state.forest) {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}

fn submit<G: IdentityGateway>(
    db: &MemDb,
    store_path: &Path,
    gateway: &G,
    day: Option<&str>,
    draft: EntryDraft,
    now: Timestamp,
) -> Result<()> {
    let identity = gateway.current_identity()?;
    let day = day_or_today(day, now);
    if !usecases::is_open(&day, now) {
        println!("Tree {day} is locked; entries can no longer be added.");
        return Ok(());
    }
    match submit_entry(db, identity.as_ref(), &day, draft)? {
        Some(submitted) => {
            db.save(store_path)?;
            println!(
                "Added entry {} ({} of {}).",
                submitted.entry.id,
                submitted.count,
                usecases::MAX_ENTRIES_PER_DAY
            );
            if submitted.at_limit {
                println!("You've reached the limit of 3 entries for today.");
            }
        }
        None => println!("Nobody is signed in; nothing was added."),
    }
    Ok(())
}

fn whoami<G: IdentityGateway>(gateway: &G) -> Result<()> {
    // Forced refresh, so a freshly granted admin claim shows up.
    match gateway.refreshed_identity()? {
        Some(identity) => {
            println!("{}", identity.label());
            println!("uid:   {}", identity.uid);
            if let Some(email) = &identity.email {
                println!("email: {email}");
            }
            println!("admin: {}", identity.admin);
        }
        None => println!("Nobody is signed in."),
    }
    Ok(())
}

fn provision<G: IdentityGateway>(
    db: &MemDb,
    store_path: &Path,
    gateway: &G,
    days: usize,
    now: Timestamp,
) -> Result<()> {
    let provisioned = provision_days(db, gateway, now, days)?;
    db.save(store_path)?;
    println!("Created {} tree docs:", provisioned.len());
    for day in provisioned {
        println!("  {}  locks at {}", day.key, day.open_until);
    }
    Ok(())
}
