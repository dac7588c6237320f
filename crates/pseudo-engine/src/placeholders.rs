use pseudo_core::CorrespondenceTable;

/// Build the correspondence table for keys given in first-seen order.
///
/// `["Jean Dupont", "Marie Curie", "Jean Dupont"]` with `"PERSONNE"` yields
/// `{"Jean Dupont": "[PERSONNE_1]", "Marie Curie": "[PERSONNE_2]"}`.
/// Keys are used as given; normalization is the caller's job.
pub fn assign_placeholders<I, S>(ordered_keys: I, category_word: &str) -> CorrespondenceTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = CorrespondenceTable::new();
    for key in ordered_keys {
        table.get_or_assign(key.as_ref(), category_word);
    }
    table
}
