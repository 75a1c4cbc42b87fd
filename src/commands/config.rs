use crate::{
    libs::{config::Config, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Database file to use from now on
    #[arg(long, value_name = "PATH")]
    pub db_file: Option<PathBuf>,
    /// Ask before deleting from the command line
    #[arg(long)]
    pub confirm_deletes: Option<bool>,
}

pub fn cmd(args: ConfigArgs, mut config: Config) -> Result<()> {
    if args.db_file.is_none() && args.confirm_deletes.is_none() {
        msg_print!(serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Some(db_file) = args.db_file {
        config.db_file = db_file;
    }
    if let Some(confirm_deletes) = args.confirm_deletes {
        config.confirm_deletes = confirm_deletes;
    }
    config.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
