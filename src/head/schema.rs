// JSON-LD builders
use super::StructuredData;
use serde_json::{json, Value};

pub const FAQ_SCRIPT_ID: &str = "faq-structured-data";
pub const PERSON_SCRIPT_ID: &str = "person-structured-data";
pub const CREATIVE_WORK_SCRIPT_ID: &str = "creative-work-structured-data";

const CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Copy)]
pub struct Organization<'a> {
    pub name: &'a str,
    pub url: &'a str,
}

impl Organization<'_> {
    fn to_value(self) -> Value {
        json!({
            "@type": "Organization",
            "name": self.name,
            "url": self.url,
        })
    }
}

pub fn faq_page<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> StructuredData {
    let questions: Vec<Value> = entries
        .into_iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    let value = json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    });

    StructuredData {
        id: FAQ_SCRIPT_ID,
        json: value.to_string(),
    }
}

pub fn person(
    name: &str,
    job_title: &str,
    works_for: Organization<'_>,
    affiliation: Option<Organization<'_>>,
) -> StructuredData {
    let mut value = json!({
        "@context": CONTEXT,
        "@type": "Person",
        "name": name,
        "jobTitle": job_title,
        "worksFor": works_for.to_value(),
    });
    if let (Some(affiliation), Some(map)) = (affiliation, value.as_object_mut()) {
        map.insert("affiliation".to_string(), affiliation.to_value());
    }

    StructuredData {
        id: PERSON_SCRIPT_ID,
        json: value.to_string(),
    }
}

pub fn creative_work(headline: &str, description: &str, author: &str) -> StructuredData {
    let value = json!({
        "@context": CONTEXT,
        "@type": "CreativeWork",
        "headline": headline,
        "description": description,
        "author": {
            "@type": "Person",
            "name": author,
        },
    });

    StructuredData {
        id: CREATIVE_WORK_SCRIPT_ID,
        json: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &StructuredData) -> Value {
        serde_json::from_str(&data.json).unwrap()
    }

    #[test]
    fn test_faq_page_shape() {
        let data = faq_page([("Is it?", "Yes."), ("Why?", "Because.")]);
        assert_eq!(data.id, FAQ_SCRIPT_ID);

        let value = parse(&data);
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["mainEntity"][1]["acceptedAnswer"]["text"], "Because.");
    }

    #[test]
    fn test_person_with_affiliation() {
        let data = person(
            "Shaunak Mukherji",
            "Founder and Creative Director",
            Organization {
                name: "Mukherji Architects Milano",
                url: "https://www.mukherjiarchitects.com",
            },
            Some(Organization {
                name: "Bobby Mukherji Architects",
                url: "https://bobbymukherji.com/",
            }),
        );
        let value = parse(&data);
        assert_eq!(value["worksFor"]["name"], "Mukherji Architects Milano");
        assert_eq!(value["affiliation"]["@type"], "Organization");
    }

    #[test]
    fn test_person_without_affiliation() {
        let data = person(
            "A",
            "B",
            Organization {
                name: "C",
                url: "https://example.com",
            },
            None,
        );
        assert!(parse(&data).get("affiliation").is_none());
    }

    #[test]
    fn test_creative_work_author() {
        let value = parse(&creative_work("Title", "Desc", "Shaunak Mukherji"));
        assert_eq!(value["author"]["name"], "Shaunak Mukherji");
        assert_eq!(value["@context"], "https://schema.org");
    }
}
