use clap::CommandFactory;
use clap_complete::{generate_to, shells::Bash};
use std::env;
use std::io::Error;

mod src {
  #![allow(unused)]
  mod cli;

  pub use cli::Cli;
}

fn main() -> Result<(), Error> {
  println!("cargo:rerun-if-changed=src/cli.rs");
  println!("cargo:rerun-if-env-changed=MSB_COMPLETION_OUT_DIR");

  // Prefer `MSB_COMPLETION_OUT_DIR` so packagers can collect the completion file
  let outdir = match env::var_os("MSB_COMPLETION_OUT_DIR").or(env::var_os("OUT_DIR")) {
    Some(outdir) => outdir,
    None => return Ok(()),
  };

  let mut cmd = src::Cli::command();
  let path = generate_to(Bash, &mut cmd, "msb", outdir)?;

  println!("cargo:warning=completion file is generated: {path:?}");

  Ok(())
}
