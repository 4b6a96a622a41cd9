use super::Tally;
use crate::resolve::ResolvedAttributes;
use crate::types::scoring::CategoryScore;

const PLACEHOLDER_NAME: &str = "Unknown";
const MIN_PHONE_DIGITS: usize = 10;

pub fn contact_score(attrs: &ResolvedAttributes) -> CategoryScore {
    let mut tally = Tally::default();

    if attrs.name.chars().count() > 1 && attrs.name != PLACEHOLDER_NAME {
        tally.award("contact.name", 35, "Name provided");
    }
    if attrs.email.contains('@') {
        tally.award("contact.email", 40, "Email provided");
    }
    let digits = attrs.phone.chars().filter(char::is_ascii_digit).count();
    if digits >= MIN_PHONE_DIGITS {
        tally.award("contact.phone", 25, "Phone provided");
    }

    tally.finish()
}
