//! `snaptrade profiles` — manage named credential profiles.

use clap::{Args, Subcommand};
use owo_colors::OwoColorize;

use crate::cli::Context;
use crate::error::Result;

#[derive(Debug, Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    pub action: ProfilesAction,
}

#[derive(Debug, Subcommand)]
pub enum ProfilesAction {
    /// List profiles, marking the active one.
    List,
    /// Switch to a profile, creating it if necessary.
    Use { name: String },
    /// Delete a profile and its stored credentials.
    Delete { name: String },
}

pub async fn run(ctx: &mut Context, args: ProfilesArgs) -> Result<()> {
    match args.action {
        ProfilesAction::List => {
            let active = ctx.store.active_profile_name().to_owned();
            for name in ctx.store.profile_names() {
                if name == active {
                    println!("* {}", name.green());
                } else {
                    println!("  {name}");
                }
            }
        }
        ProfilesAction::Use { name } => {
            ctx.store.set_active_profile(&name)?;
            println!("✅ Active profile is now {name}.");
        }
        ProfilesAction::Delete { name } => {
            ctx.store.delete_profile(&name)?;
            println!("✅ Profile {name} deleted.");
        }
    }
    Ok(())
}
