//! Directory of external rehabilitation resources

/// A link in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// A group of links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub links: Vec<ResourceLink>,
}

const fn link(title: &'static str, url: &'static str, description: &'static str) -> ResourceLink {
    ResourceLink {
        title,
        url,
        description,
    }
}

const FACEBOOK_GROUPS: &str = "https://www.facebook.com/groups/";

/// The full directory
pub static DIRECTORY: &[(&str, &str, &str, &[ResourceLink])] = &[
    (
        "medical",
        "Medical and physical rehabilitation",
        "🧑‍⚕️",
        &[
            link(
                "Rehabilitation centers (Clalit)",
                "https://www.clalit.co.il/he/info/ServiceBag/Pages/rehabilitation_centers.aspx",
                "Information on Clalit health fund rehabilitation centers",
            ),
            link(
                "Reuth Rehabilitation Hospital",
                "https://www.reuth.org.il/",
                "A leading rehabilitation center in Israel",
            ),
            link(
                "Yad Mechavenet",
                "https://www.yadmev.org.il/",
                "Counseling and guidance for people with disabilities in rehabilitation",
            ),
        ],
    ),
    (
        "mental",
        "Mental health",
        "🧠",
        &[
            link(
                "Enosh",
                "https://www.enosh.org.il/",
                "The Israeli mental health association",
            ),
            link("Sahar", "https://www.sahar.org.il/", "Online emotional support"),
            link("ERAN", "https://www.eran.org.il/", "Emotional first aid"),
        ],
    ),
    (
        "rights",
        "Medical and social rights",
        "⚖️",
        &[
            link(
                "National Insurance Institute",
                "https://www.btl.gov.il/",
                "Information portal on rights and allowances",
            ),
            link(
                "Disabled veterans rehabilitation - Ministry of Defense",
                "https://www.gov.il/he/departments/ministry_of_defense_rehabilitation",
                "Rights and rehabilitation services for disabled veterans",
            ),
            link(
                "Kol Zchut",
                "https://www.kolzchut.org.il/he/%D7%9E%D7%A9%D7%AA%D7%A7%D7%9E%D7%99%D7%9D",
                "Comprehensive information on the rights of people in rehabilitation",
            ),
        ],
    ),
    (
        "employment",
        "Vocational training and employment",
        "💼",
        &[
            link(
                "ILAN employment centers",
                "https://www.ilan-israel.co.il/",
                "Employment assistance for people with physical disabilities",
            ),
            link(
                "Supported employment - JDC Israel",
                "https://www.tevet.org.il/",
                "Employment programs for special populations",
            ),
            link(
                "Lashem - integrating students with disabilities",
                "https://www.lashem.ac.il/",
                "Support for students with disabilities in academia",
            ),
        ],
    ),
    (
        "community",
        "Community and support",
        "🧑‍🤝‍🧑",
        &[
            link(
                "Accessible community",
                "https://www.kolzchut.org.il/he/קהילה_נגישה",
                "Local support communities across the country",
            ),
            link(
                "Access Israel",
                "https://www.aisrael.org/",
                "Promoting accessibility and inclusion of people with disabilities",
            ),
            link(
                "Spinal rehabilitation Israel (Facebook)",
                FACEBOOK_GROUPS,
                "Support group for people with spinal injuries",
            ),
            link(
                "PTSD survivors (Facebook)",
                FACEBOOK_GROUPS,
                "Support group for people with emotional trauma",
            ),
            link(
                "Amputee Israel Group",
                FACEBOOK_GROUPS,
                "Support group for people with amputations",
            ),
        ],
    ),
    (
        "housing",
        "Transportation and home adaptations",
        "🏠",
        &[
            link(
                "Access Israel association",
                "https://www.aisrael.org/",
                "Accessibility advice for home and transportation",
            ),
            link(
                "Housing assistance - Ministry of Housing",
                "https://www.gov.il/he/departments/ministry_of_construction_and_housing",
                "Help adapting housing for people with disabilities",
            ),
            link(
                "Adapted vehicle eligibility - National Insurance",
                "https://www.btl.gov.il/benefits/Disability/rehabilitation/Pages/AdaptedVehicle.aspx",
                "Information on eligibility for an adapted vehicle",
            ),
        ],
    ),
];

/// All categories, in display order
pub fn categories() -> Vec<ResourceCategory> {
    DIRECTORY
        .iter()
        .map(|&(id, title, icon, links)| ResourceCategory {
            id,
            title,
            icon,
            links: links.to_vec(),
        })
        .collect()
}

/// Categories whose links match `term` in title or description, ignoring
/// case. Categories left without links are dropped; an empty term matches
/// everything.
pub fn search(term: &str) -> Vec<ResourceCategory> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return categories();
    }

    categories()
        .into_iter()
        .filter_map(|mut category| {
            category.links.retain(|l| {
                l.title.to_lowercase().contains(&term)
                    || l.description.to_lowercase().contains(&term)
            });
            (!category.links.is_empty()).then_some(category)
        })
        .collect()
}

/// Whether `url` belongs to the directory
pub fn is_listed(url: &str) -> bool {
    DIRECTORY
        .iter()
        .flat_map(|&(_, _, _, links)| links.iter())
        .any(|l| l.url == url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_shape() {
        let all = categories();
        assert_eq!(all.len(), 6);
        assert_eq!(all.iter().map(|c| c.links.len()).sum::<usize>(), 20);
        assert_eq!(all[4].id, "community");
    }

    #[test]
    fn test_search_filters_links_and_drops_empty_categories() {
        let found = search("SUPPORT GROUP");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "community");
        assert_eq!(found[0].links.len(), 3);

        assert!(search("no such resource").is_empty());
        assert_eq!(search("  ").len(), 6);
    }

    #[test]
    fn test_is_listed() {
        assert!(is_listed("https://www.reuth.org.il/"));
        assert!(!is_listed("https://example.com/"));
    }
}
