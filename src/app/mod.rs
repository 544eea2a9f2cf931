pub mod args;
mod setup;
mod sink;
mod worker;

pub use args::AppArgs;

use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp {
        args,
        listener,
        dispatcher,
    } = setup::prepare(args).await?;

    if args.sink {
        sink::run(listener).await
    } else {
        worker::run(listener, dispatcher, args.interactive).await
    }
}
