use lock_slot_reader::cli::Cli;
use lock_slot_reader::onchain::{bounded_length, LockReader, LockSlot, RpcStorageReader};
use lock_slot_reader::output;

use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr so stdout only carries lock records.
fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Main entry point: read the lock array once and print every element
#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let reader = RpcStorageReader::new(
        &cli.rpc_url,
        cli.block,
        Duration::from_secs(cli.timeout_secs),
    )?;
    let locks = LockReader::new(&reader, cli.contract, cli.array_slot);

    output::print_banner(&cli.contract, &cli.rpc_url, reader.block());

    let length = locks.array_length().await?;
    info!(contract = %cli.contract, length, "Read locks array length");
    output::print_array_length(length, locks.base_slot());

    let count = bounded_length(length, cli.max_locks);
    if count < length {
        output::print_truncated(length, count);
    }

    // Strictly sequential: element i is read and printed before i + 1 is requested
    let (mut decoded, mut skipped) = (0u64, 0u64);
    for index in 0..count {
        match locks.read_lock(index).await? {
            LockSlot::Present(entry) => {
                output::print_lock(&entry);
                decoded += 1;
            }
            LockSlot::Missing { .. } => skipped += 1,
        }
    }

    output::print_summary(decoded, skipped);
    Ok(())
}
