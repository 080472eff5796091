//! Presentation only: each screen prints static data; the shell decides
//! which one is active.

use crate::catalog::{self, format_brl};

const RULE: &str = "────────────────────────────────────────────────";

pub fn header(address: &str) {
    println!();
    println!("{RULE}");
    println!(" 🔥 Gasola   Entregar em: {address}");
    println!("{RULE}");
    println!(" [1] Menu   [2] Produtos   [3] Histórico   (alterar | sair)");
}

pub fn menu() {
    println!();
    println!(" Olá! 👋  O que você precisa hoje?");
    println!();
    for item in catalog::MENU_ITEMS {
        let badge = if item.popular { "  ⭐ Popular" } else { "" };
        println!(" {:<18} {:>10}{badge}", item.title, item.price_label);
        println!("   {}", item.description);
    }
    println!();
    print!(" Categorias:");
    for (name, active) in catalog::CATEGORIES {
        if *active {
            print!(" [{name}]");
        } else {
            print!(" {name}");
        }
    }
    println!();
    println!();
    println!(" 🎉 Primeira compra? Ganhe R$ 10 de desconto!");
}

pub fn products() {
    println!();
    println!(" Produtos: encontre o que você precisa");
    for product in catalog::PRODUCTS {
        println!();
        println!(" [{}] {}", product.id, product.name);
        println!("     {}", product.description);
        match product.original_price_cents {
            Some(original) => println!(
                "     {}  (de {})",
                format_brl(product.price_cents),
                format_brl(original)
            ),
            None => println!("     {}", format_brl(product.price_cents)),
        }
        let stock = if product.in_stock {
            "disponível"
        } else {
            "indisponível"
        };
        println!(
            "     ★ {:.1} ({} avaliações) · {stock}",
            product.rating, product.reviews
        );
    }
}

pub fn history() {
    println!();
    println!(" Histórico de pedidos");
    for order in catalog::ORDERS {
        println!();
        println!(" {}  {}  [{}]", order.id, order.date, order.status);
        for item in order.items {
            println!("   {item}");
        }
        println!("   Total: {}", format_brl(order.total_cents));
    }
}
