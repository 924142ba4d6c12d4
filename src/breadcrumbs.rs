use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the last crumb, which is the current page.
    pub href: Option<String>,
}

pub type Labels = HashMap<String, String>;

pub fn default_labels() -> Labels {
    [
        ("/branches", "Branches"),
        ("/customers", "Customers"),
        ("/dispatchers", "Dispatchers"),
        ("/parcels", "Parcels"),
        ("/settings", "Settings"),
        ("/settings/profile", "Profile"),
    ]
    .into_iter()
    .map(|(path, label)| (path.to_string(), label.to_string()))
    .collect()
}

pub fn breadcrumbs(path: &str, labels: &Labels) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: Some("/".to_string()),
    }];

    let mut prefix = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);
        crumbs.push(Crumb {
            label: labels
                .get(&prefix)
                .cloned()
                .unwrap_or_else(|| capitalize(segment)),
            href: Some(prefix.clone()),
        });
    }

    if let Some(last) = crumbs.last_mut() {
        last.href = None;
    }
    crumbs
}

pub fn format_crumbs(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<&str>>()
        .join(" / ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_settings_profile() {
        let crumbs = breadcrumbs("/settings/profile", &default_labels());
        assert_eq!("Home / Settings / Profile", format_crumbs(&crumbs));
        assert_eq!(
            vec![Some("/".to_string()), Some("/settings".to_string()), None],
            crumbs.iter().map(|c| c.href.clone()).collect::<Vec<Option<String>>>()
        );
    }

    #[test]
    fn test_root_is_unlinked_home() {
        assert_eq!(
            vec![Crumb {
                label: "Home".to_string(),
                href: None
            }],
            breadcrumbs("/", &default_labels())
        );
    }

    #[test]
    fn test_unknown_segment_is_capitalized() {
        let crumbs = breadcrumbs("/parcels/tracking//", &default_labels());
        assert_eq!("Home / Parcels / Tracking", format_crumbs(&crumbs));
    }
}
