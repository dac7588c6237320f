use std::collections::HashMap;

use pseudo_core::CorrespondenceTable;

/// Put the original surface strings back in place of the table's placeholders.
///
/// Bracketed tokens that are not in the table are left as they are. Text
/// that already looked like a placeholder before pseudonymization cannot be
/// told apart from a real one and is replaced too: `"Voir [PERSONNE_1] et
/// Jean"` pseudonymized and restored comes back as `"Voir Jean et Jean"`.
pub fn restore(text: &str, table: &CorrespondenceTable) -> String {
    if table.is_empty() {
        return text.to_string();
    }
    let originals: HashMap<&str, &str> = table.iter().map(|(k, p)| (p, k)).collect();

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        match candidate.find(']') {
            Some(close) => {
                let token = &candidate[..=close];
                match originals.get(token) {
                    Some(original) => {
                        out.push_str(original);
                        rest = &candidate[close + 1..];
                    }
                    None => {
                        out.push('[');
                        rest = &candidate[1..];
                    }
                }
            }
            None => {
                out.push_str(candidate);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
