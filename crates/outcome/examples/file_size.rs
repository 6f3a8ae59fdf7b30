use std::io;
use std::path::Path;

use outcome::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("📏 File sizes");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let paths = if args.is_empty() {
        vec!["Cargo.toml".to_string(), "does-not-exist.bin".to_string()]
    } else {
        args
    };

    // Outcome-aware callers branch on the variant
    println!("\n🔍 Checking:");
    for path in &paths {
        let size = file_size(Path::new(path))?;
        match &size {
            Outcome::Success(bytes) => println!("   {path}: {bytes} bytes"),
            Outcome::Failure(error) => println!("   {path}: {} ({error})", error.kind()),
        }
    }

    // Callers that only know raised errors unwrap with `get`
    println!("\n💥 Unwrapping:");
    for path in &paths {
        match file_size(Path::new(path))?.get() {
            Ok(bytes) => println!("   {path}: {bytes} bytes"),
            Err(raised) => println!("   {path}: raised {raised}"),
        }
    }

    Ok(())
}

fn file_size(path: &Path) -> anyhow::Result<Outcome<io::Error, u64>> {
    Outcome::from_throwing(&ExceptionFilter::of(), || {
        std::fs::metadata(path).map(|meta| meta.len())
    })
}
