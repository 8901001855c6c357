use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;

use clap::Parser;
use common::clone;

#[derive(clap::Parser, Debug)]
struct Args {
  #[command(subcommand)]
  pub cmd: Cmd,
}

#[derive(clap::Subcommand, Debug)]
enum Cmd {
  /// Run the native test suites
  Test {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    args: Vec<String>,
  },
  /// Build the browser bindings for wasm32
  Web {
    #[arg(long)]
    release: bool,
  },
  /// Tests, then the browser build
  Ci,
}

/// Where Ctrl-C is forwarded to; whichever task is running registers itself here.
static INTERRUPT: OnceLock<Mutex<Option<Sender<Option<i32>>>>> = OnceLock::new();

/// Run `cargo` with `args` in `root`, killing it on Ctrl-C. Returns the exit code.
fn cargo(root: &Path, args: &[String]) -> u8 {
  eprintln!("> cargo {}", args.join(" "));
  let child = match Command::new("cargo").args(args).current_dir(root).spawn() {
    Ok(child) => Arc::new(Mutex::new(child)),
    Err(e) => {
      eprintln!("Failed to start cargo: {e}");
      return 1;
    },
  };
  let (snd, recv) = channel();
  *INTERRUPT.get_or_init(Default::default).lock().unwrap() = Some(snd.clone());
  thread::scope(|scope| {
    scope.spawn(clone!(child, snd; move || {
      // polling so the lock is free for the interrupt path
      let code = loop {
        match child.lock().unwrap().try_wait() {
          Ok(Some(status)) => break status.code(),
          Ok(None) => (),
          Err(_) => break None,
        }
        thread::sleep(std::time::Duration::from_millis(50));
      };
      let _ = snd.send(code.or(Some(1)));
    }));
    let code = recv.recv().unwrap();
    if code.is_none() {
      let _ = child.lock().unwrap().kill();
    }
    *INTERRUPT.get().unwrap().lock().unwrap() = None;
    code.map_or(130, |c| c.clamp(0, 255) as u8)
  })
}

fn test(root: &Path, extra: Vec<String>) -> u8 {
  let mut args = ["test", "-p", "helpers-common", "-p", "helpers-web"].map(String::from).to_vec();
  args.extend(extra);
  cargo(root, &args)
}

fn web(root: &Path, release: bool) -> u8 {
  let mut args = ["build", "-p", "helpers-web", "--target", "wasm32-unknown-unknown"]
    .map(String::from)
    .to_vec();
  if release {
    args.push("--release".to_string());
  }
  cargo(root, &args)
}

fn main() -> ExitCode {
  let mut root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
  root.pop();
  ctrlc::set_handler(|| {
    if let Some(snd) = INTERRUPT.get().and_then(|m| m.lock().unwrap().clone()) {
      let _ = snd.send(None);
    }
  })
  .expect("Ctrl-C handler should only be installed once");
  let code = match Args::parse().cmd {
    Cmd::Test { args } => test(&root, args),
    Cmd::Web { release } => web(&root, release),
    Cmd::Ci => match test(&root, Vec::new()) {
      0 => web(&root, false),
      code => code,
    },
  };
  ExitCode::from(code)
}
