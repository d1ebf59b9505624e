/// Email shape check: a local part of letters, digits and `_'+-.` that does not
/// start with a dot or end with `'` or `.`, one `@`, then one or more labels of
/// letters, digits and hyphens (not starting with a hyphen) followed by a
/// top-level label of at least two letters. No `..` anywhere.
pub fn is_email(email: &str) -> bool {
    if email.contains("..") {
        return false;
    }

    let Some((local_part, domain_part)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local_part.starts_with('.')
        && local_part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
        && local_part
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'));
    if !local_ok {
        return false;
    }

    let Some((labels, tld)) = domain_part.rsplit_once('.') else {
        return false;
    };

    let labels_ok = labels.split('.').all(|label| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    labels_ok && tld_ok
}

pub fn field_class(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "input-field input-invalid",
        None => "input-field",
    }
}

pub fn field_style(error: Option<&str>) -> &'static str {
    match error {
        Some(_) => "border: 2px solid #ef4444; background-color: #fef2f2;",
        None => "",
    }
}
