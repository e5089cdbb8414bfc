//! Bucle interactivo de consola.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::assistant::Assistant;

const BANNER: &str = "Cognitive Neuroscience Assistant 🧠\n\
Type your question. Commands: /mode tutor | /mode concise | /quit";

/// Ejecuta el REPL hasta `/quit`, `/exit` o fin de entrada.
pub fn run(assistant: &mut Assistant) -> Result<()> {
    println!("{BANNER}\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("you> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF (Ctrl-D)
            println!("\nbye!");
            break;
        }

        let user = line.trim();
        if user.is_empty() {
            continue;
        }
        if user.eq_ignore_ascii_case("/quit") || user.eq_ignore_ascii_case("/exit") {
            println!("assistant> Goodbye!");
            break;
        }

        let reply = assistant.answer(user);
        println!("assistant> {reply}\n");
    }

    Ok(())
}
