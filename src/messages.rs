//! Outbound message catalog
//!
//! Every text the assistant sends, in one place. The conversation layer
//! composes these; nothing here talks to the network. All copy is
//! pt-BR with WhatsApp markdown (asterisk bold) and emoji markers.

use crate::directory::Business;

pub const WELCOME: &str = "👋 *Seja bem-vindo ao Guia Ilhéus!* Seu guia mais completo de empresas da cidade.\n\nDigite:\n1️⃣ *Buscar empresa por nome*\n2️⃣ *Buscar por categorias*";

pub const ASK_NAME: &str = "🔎 Digite o nome da empresa que deseja buscar:";

pub const INVALID_OPTION: &str = "❌ Opção inválida. Digite *1* ou *2* para continuar.";

pub const INVALID_CATEGORY: &str =
    "❌ Categoria inválida. Digite o número ou nome exato da categoria listada.";

pub const INVALID_SELECTION: &str =
    "❌ Empresa inválida. Digite o número ou nome exato da lista.";

pub const EMPTY_CATEGORY: &str = "❌ Nenhuma empresa encontrada nesta categoria.";

pub const NAME_SEARCH_ERROR: &str = "❌ Erro ao buscar empresas. Tente novamente.";

pub const CATEGORY_LIST_ERROR: &str = "❌ Erro ao buscar categorias. Tente novamente.";

pub const CATEGORY_SEARCH_ERROR: &str = "❌ Erro ao buscar empresas da categoria.";

pub const THANKS: &str =
    "✅ Obrigado por usar o *Guia Ilhéus*! Caso queira fazer outra busca, digite *menu*.";

const NOT_INFORMED: &str = "Não informado";
const NOT_AVAILABLE: &str = "Não disponível";

pub fn name_results(businesses: &[Business]) -> String {
    format!(
        "🔍 *Empresas encontradas:*\n\n{}\n\nDigite o número ou nome da empresa para ver os detalhes.",
        numbered(businesses.iter().map(|b| b.name.as_str()))
    )
}

pub fn category_results(category: &str, businesses: &[Business]) -> String {
    format!(
        "📦 *Empresas na categoria \"{category}\":*\n\n{}\n\nDigite o número ou nome da empresa para ver os detalhes.",
        numbered(businesses.iter().map(|b| b.name.as_str()))
    )
}

pub fn category_menu(categories: &[String]) -> String {
    format!(
        "📚 *Categorias disponíveis:*\n{}\n\nDigite o número ou nome da categoria desejada.",
        numbered(categories.iter().map(String::as_str))
    )
}

/// Shown when a name search comes back empty, steering the user to browse
pub fn category_fallback(categories: &[String]) -> String {
    format!(
        "⚠️ Nenhuma empresa encontrada com esse nome.\n\n📚 *Categorias disponíveis:*\n{}\n\nDigite o número ou nome de uma categoria para buscar por ela.",
        numbered(categories.iter().map(String::as_str))
    )
}

/// Full business profile, one labeled line per field
///
/// Missing fields render a placeholder so the layout never shifts. WhatsApp
/// and Instagram values become deep links: the number keeps digits only, the
/// handle drops its leading `@`.
pub fn profile(business: &Business) -> String {
    let whatsapp = match present(business.whatsapp.as_deref()) {
        Some(number) => {
            let digits: String = number.chars().filter(char::is_ascii_digit).collect();
            format!("(https://wa.me/{digits})")
        }
        None => NOT_INFORMED.to_string(),
    };
    let instagram = match present(business.instagram.as_deref()) {
        Some(handle) => format!("(https://instagram.com/{})", handle.trim_start_matches('@')),
        None => NOT_INFORMED.to_string(),
    };
    let website = match present(business.website.as_deref()) {
        Some(url) => format!("({url})"),
        None => NOT_INFORMED.to_string(),
    };

    format!(
        "📌 *{}*\n📍 *Endereço:* {}\n📞 *Telefone:* {}\n📱 *WhatsApp:* {whatsapp}\n📸 *Instagram:* {instagram}\n🌐 *Site:* {website}\n📝 *Descrição:* {}",
        business.name,
        present(business.address.as_deref()).unwrap_or(NOT_INFORMED),
        present(business.phone.as_deref()).unwrap_or(NOT_INFORMED),
        present(business.description.as_deref()).unwrap_or(NOT_AVAILABLE),
    )
}

/// Empty strings from the directory count as missing
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `1. First\n2. Second\n...`
fn numbered<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
