//! Address onboarding: welcome entry, CEP lookup, confirmation.

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cep::{self, CepClient, CepError};
use crate::confirm::ConfirmationForm;
use crate::geo::{LocationResolver, ResolvedAddress};
use crate::store::AddressStore;

/// Walks the user from the welcome step to a confirmed address.
///
/// `None` means the user left without completing onboarding.
pub async fn run(store: &mut dyn AddressStore) -> color_eyre::Result<Option<String>> {
    let mut editor = DefaultEditor::new()?;
    let resolver = LocationResolver::new()?;
    let cep_client = CepClient::new()?;

    loop {
        print_welcome();
        let choice = match read_line(&mut editor, "> ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        match choice.trim() {
            "1" => {
                println!("Obtendo localização...");
                match resolver.resolve().await {
                    Ok(resolved) => {
                        if let Some(address) = confirm_step(&mut editor, store, resolved)? {
                            return Ok(Some(address));
                        }
                    }
                    Err(err) => {
                        println!("Não foi possível obter sua localização: {err}.");
                        println!("Por favor, digite seu CEP.");
                    }
                }
            }
            "2" => {
                if let Some(resolved) = cep_step(&mut editor, &cep_client).await? {
                    if let Some(address) = confirm_step(&mut editor, store, resolved)? {
                        return Ok(Some(address));
                    }
                }
            }
            "q" | "sair" => return Ok(None),
            "" => {}
            other => println!("Opção desconhecida: {other}"),
        }
    }
}

fn print_welcome() {
    println!();
    println!("Bem-vindo ao Gasola! 🔥");
    println!("Delivery de botijão de gás rápido e seguro.");
    println!("Para começar, precisamos do seu endereço de entrega.");
    println!();
    println!(" [1] Usar minha localização");
    println!(" [2] Digitar meu CEP");
    println!(" [q] Sair");
}

/// CEP entry loop. `None` backs out to the welcome step.
async fn cep_step(
    editor: &mut DefaultEditor,
    client: &CepClient,
) -> color_eyre::Result<Option<ResolvedAddress>> {
    println!();
    println!("Digite seu CEP. Vamos buscar seu endereço automaticamente.");
    loop {
        let line = match read_line(editor, "CEP: ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        let formatted = cep::format_cep(&line);
        if !cep::is_complete(&formatted) {
            println!("Digite o CEP completo (8 dígitos).");
            continue;
        }
        println!("Consultando CEP {formatted}...");
        match client.lookup(&formatted).await {
            Ok(base) => {
                return Ok(Some(ResolvedAddress {
                    base,
                    coordinates: None,
                }))
            }
            Err(CepError::NotFound) => {
                println!("CEP não encontrado. Verifique e tente novamente.")
            }
            Err(err) => println!("{err}. Tente novamente."),
        }
    }
}

/// Collects the refinements and persists the confirmation record.
/// `None` backs out without persisting anything.
fn confirm_step(
    editor: &mut DefaultEditor,
    store: &mut dyn AddressStore,
    resolved: ResolvedAddress,
) -> color_eyre::Result<Option<String>> {
    println!();
    println!("Confirme seu endereço");
    if let Some(coordinates) = resolved.coordinates {
        println!(
            "Localização encontrada: {:.6}, {:.6}",
            coordinates.lat, coordinates.lng
        );
    }
    println!("Endereço base: {}", resolved.base);

    let mut form = ConfirmationForm::new(resolved);
    loop {
        let number = match read_line(editor, "Número (obrigatório): ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        form.number = number.trim().to_string();
        if form.can_confirm() {
            break;
        }
        println!("Informe o número para continuar.");
    }
    form.complement = match read_line(editor, "Complemento (opcional): ")? {
        Some(line) => line.trim().to_string(),
        None => return Ok(None),
    };
    form.reference = match read_line(editor, "Ponto de referência (opcional): ")? {
        Some(line) => line.trim().to_string(),
        None => return Ok(None),
    };

    println!();
    println!("Endereço completo: {}", form.preview());
    if !form.reference.is_empty() {
        println!("📍 {}", form.reference);
    }

    loop {
        let answer = match read_line(editor, "Confirmar endereço? [s/n] ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        match answer.trim().to_lowercase().as_str() {
            "s" | "sim" => break,
            "n" | "nao" | "não" => return Ok(None),
            _ => println!("Responda s ou n."),
        }
    }

    let record = match form.confirm() {
        Some(record) => record,
        None => return Ok(None),
    };
    store.set_record(&record)?;
    debug!("confirmation record persisted");
    Ok(Some(record.full_address))
}

/// `None` when the user backs out (Ctrl-C / Ctrl-D).
fn read_line(editor: &mut DefaultEditor, prompt: &str) -> color_eyre::Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
