// crates/sewa-core/src/contact.rs
//
// Outbound WhatsApp contact link for a listing. Pure string construction.

use crate::item::Item;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Opening message a renter sends to an owner.
pub fn enquiry_message(title: &str) -> String {
    format!(
        "Hi, saya berminat nak sewa {} yang saya nampak di SewaLokal.",
        title
    )
}

/// Build the click-to-chat link for a listing's contact phone.
pub fn whatsapp_link(item: &Item) -> String {
    whatsapp_link_for(&item.contact_phone, &item.title)
}

/// Build the click-to-chat link from a raw phone number and listing title.
///
/// Non-digit characters are stripped from the phone number since wa.me only
/// accepts the international number in digits.
pub fn whatsapp_link_for(phone: &str, title: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        digits,
        urlencoding::encode(&enquiry_message(title))
    )
}
