use anyhow::Result;
use clap::Args;
use tracing::trace;

use crate::form::FormArgs;

#[derive(Debug, Args)]
pub struct PayloadArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub fn payload(args: PayloadArgs) -> Result<()> {
    trace!("Entering payload function");
    let request = args.form.resolve()?.to_request()?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
