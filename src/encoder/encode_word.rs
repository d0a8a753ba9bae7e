extern crate word_writer;
use word_writer::errors::*;
use word_writer::*;

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process;

#[macro_use]
extern crate log;

use clap::{App, AppSettings, Arg, ArgMatches};
use env_logger::Env;

fn program_name() -> String {
    env::args_os()
        .next()
        .as_ref()
        .and_then(|p| Path::new(p).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "encode-word".to_string())
}

fn run(matches: &ArgMatches) -> Result<()> {
    if matches.is_present("reverse") {
        let word = read_word(&mut io::stdin().lock())?;
        info!("read word {:#010x} from stdin", word);
        return print_word(&mut io::stdout().lock(), word);
    }

    let bytes = encode_arg(&program_name(), matches.value_of("int"))?;
    debug!("writing bytes {:02x?}", bytes);
    write_word(&mut io::stdout().lock(), &bytes)
}

fn main() {
    let matches = App::new("encode-word")
        .version("0.1")
        .author("Gheorghe Glavan <george.glavan27@gmail.com>")
        .about("Writes a 32-bit integer to stdout as 4 little-endian bytes")
        // any hyphen argument that is not made of known flags is a literal
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("int")
                .index(1)
                .allow_hyphen_values(true)
                .help("Word to encode, as a 0x-prefixed hex or decimal literal"),
        )
        .arg(
            Arg::with_name("reverse")
                .short("r")
                .conflicts_with("int")
                .help("Read 4 bytes from stdin and print the word they encode"),
        )
        .get_matches();

    let env = Env::default().filter_or("WORD_LOG_LEVEL", "warn");
    env_logger::init_from_env(env);

    if let Err(e) = run(&matches) {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        let _ = writeln!(stderr, "{}", e);
        for cause in e.iter().skip(1) {
            let _ = writeln!(stderr, "caused by: {}", cause);
        }
        debug!("exiting on {:?}", e.kind());
        process::exit(1);
    }
}
