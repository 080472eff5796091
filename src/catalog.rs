//! Static storefront data shown by the shell screens.

use std::fmt;

/// Prices are integer centavos; shown as `R$ 85,00`.
pub fn format_brl(cents: u64) -> String {
    format!("R$ {},{:02}", cents / 100, cents % 100)
}

/// One sellable item in the catalog.
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u64,
    pub original_price_cents: Option<u64>,
    pub in_stock: bool,
    pub rating: f32,
    pub reviews: u32,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Botijão P13 - Ultragaz",
        description: "Botijão de 13kg para uso doméstico",
        price_cents: 8500,
        original_price_cents: Some(9500),
        in_stock: true,
        rating: 4.8,
        reviews: 234,
    },
    Product {
        id: 2,
        name: "Botijão P13 - Liquigás",
        description: "Botijão de 13kg para uso doméstico",
        price_cents: 8200,
        original_price_cents: Some(9000),
        in_stock: true,
        rating: 4.7,
        reviews: 189,
    },
    Product {
        id: 3,
        name: "Botijão P45 - Ultragaz",
        description: "Botijão de 45kg para uso comercial",
        price_cents: 28000,
        original_price_cents: Some(30000),
        in_stock: true,
        rating: 4.9,
        reviews: 67,
    },
    Product {
        id: 4,
        name: "Regulador de Pressão",
        description: "Regulador universal com mangueira",
        price_cents: 4500,
        original_price_cents: None,
        in_stock: false,
        rating: 4.6,
        reviews: 123,
    },
];

/// Highlight card on the home screen.
pub struct MenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub price_label: &'static str,
    pub popular: bool,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        title: "Botijão P13",
        description: "Gás de cozinha tradicional",
        price_label: "R$ 85,00",
        popular: true,
    },
    MenuItem {
        title: "Botijão P45",
        description: "Para uso comercial",
        price_label: "R$ 280,00",
        popular: false,
    },
    MenuItem {
        title: "Entrega Expressa",
        description: "Receba em até 2 horas",
        price_label: "+ R$ 15,00",
        popular: false,
    },
];

/// `(name, currently active)`
pub const CATEGORIES: &[(&str, bool)] = &[
    ("Botijões", true),
    ("Acessórios", false),
    ("Serviços", false),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Entregue,
    Cancelado,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Entregue => write!(f, "Entregue"),
            OrderStatus::Cancelado => write!(f, "Cancelado"),
        }
    }
}

/// One line of the order history.
pub struct PastOrder {
    pub id: &'static str,
    pub date: &'static str,
    pub status: OrderStatus,
    pub items: &'static [&'static str],
    pub total_cents: u64,
}

pub const ORDERS: &[PastOrder] = &[
    PastOrder {
        id: "#12345",
        date: "15 Jan 2025",
        status: OrderStatus::Entregue,
        items: &["1x Botijão P13 - Ultragaz"],
        total_cents: 8500,
    },
    PastOrder {
        id: "#12344",
        date: "10 Jan 2025",
        status: OrderStatus::Entregue,
        items: &["1x Botijão P13 - Liquigás", "1x Regulador"],
        total_cents: 12700,
    },
    PastOrder {
        id: "#12343",
        date: "05 Jan 2025",
        status: OrderStatus::Cancelado,
        items: &["1x Botijão P45 - Ultragaz"],
        total_cents: 28000,
    },
    PastOrder {
        id: "#12342",
        date: "28 Dez 2024",
        status: OrderStatus::Entregue,
        items: &["2x Botijão P13 - Ultragaz"],
        total_cents: 17000,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_centavos_with_a_comma() {
        assert_eq!(format_brl(8500), "R$ 85,00");
        assert_eq!(format_brl(12700), "R$ 127,00");
        assert_eq!(format_brl(1), "R$ 0,01");
        assert_eq!(format_brl(0), "R$ 0,00");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<u32> = PRODUCTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PRODUCTS.len());
    }
}
