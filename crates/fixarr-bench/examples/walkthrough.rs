//! Walkthrough of the FixedArray API: construct, insert, index, and
//! the error paths.
//!
//! Run with `RUST_LOG=debug cargo run --example walkthrough` to see the
//! allocation log lines.

use fixarr::{ArrayError, FixedArray};
use fixarr_test_utils::{Blob, BlobHooks};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ArrayError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .compact()
        .init();

    let mut array = FixedArray::with_capacity(4, Some(&0))?;
    array.insert(0, 1)?;
    array[0] = 2;

    println!("{}", array.get(0)?);
    println!("{}", array.get(1)?);
    println!("{}", array[0]);

    match array.get(5) {
        Ok(value) => println!("unexpected value {value}"),
        Err(err) => println!("get error: {err}"),
    }
    println!("{array}");

    // Declare first, size later.
    let mut late: FixedArray<i32> = FixedArray::new();
    late.init(3, None)?;
    if let Err(err) = late.init(8, None) {
        println!("init error: {err}");
    }

    // Deep copies through the duplicate hook.
    let mut blobs = FixedArray::with_capacity_and_hooks(2, None, BlobHooks)?;
    blobs.insert_from(1, &Blob::new(9, b"owned"))?;
    println!(
        "blob at {:?}: {:?}",
        blobs.position(&Blob::new(9, b""))?,
        blobs.get(1)?
    );

    Ok(())
}
