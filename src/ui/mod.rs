//! Screen routing: splash, session gate, onboarding, shell.

mod onboarding;
mod screens;

use std::time::Duration;

use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::store::AddressStore;

enum Screen {
    Menu,
    Products,
    History,
}

enum ShellAction {
    ChangeAddress,
    Quit,
}

/// Top-level loop. The shell is only ever entered with a non-empty
/// session address; anything else routes back to onboarding.
pub async fn run<S: AddressStore>(mut store: S) -> color_eyre::Result<()> {
    splash().await;
    loop {
        let address = match store.get()? {
            Some(address) => address,
            None => match onboarding::run(&mut store).await? {
                Some(address) => {
                    store.set(&address)?;
                    address
                }
                None => return Ok(()),
            },
        };
        info!("session address: {address}");
        match shell(&address)? {
            ShellAction::ChangeAddress => {
                store.clear()?;
                debug!("session address cleared, re-entering onboarding");
            }
            ShellAction::Quit => return Ok(()),
        }
    }
}

async fn splash() {
    println!();
    println!("  🔥 Gasola");
    println!("  Delivery de botijão de gás");
    tokio::time::sleep(Duration::from_millis(1500)).await;
}

fn shell(address: &str) -> color_eyre::Result<ShellAction> {
    let mut editor = DefaultEditor::new()?;
    let mut screen = Screen::Menu;
    loop {
        screens::header(address);
        match screen {
            Screen::Menu => screens::menu(),
            Screen::Products => screens::products(),
            Screen::History => screens::history(),
        }
        let line = match editor.readline("gasola> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Ok(ShellAction::Quit)
            }
            Err(err) => return Err(err.into()),
        };
        match line.trim().to_lowercase().as_str() {
            "1" | "menu" => screen = Screen::Menu,
            "2" | "produtos" => screen = Screen::Products,
            "3" | "historico" | "histórico" => screen = Screen::History,
            "alterar" => return Ok(ShellAction::ChangeAddress),
            "sair" | "q" => return Ok(ShellAction::Quit),
            "" => {}
            other => println!("Comando desconhecido: {other}"),
        }
    }
}
