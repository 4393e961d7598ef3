use crate::shared::components::ui::RichSelectOption;
use contracts::domain::a001_person::Person;

pub fn format_person_full_name(person: &Person) -> String {
    format!("{} {}", person.first_name, person.last_name)
}

/// Visual content of a person item in the open list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionBody {
    pub picture_url: String,
    pub picture_alt: String,
    pub name: String,
    pub profession: String,
}

/// Selectable projection of a [`Person`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonOption {
    pub value: String,
    /// Plain text shown by the collapsed select
    pub label: String,
    pub body: OptionBody,
}

impl From<&Person> for PersonOption {
    fn from(person: &Person) -> Self {
        let full_name = format_person_full_name(person);
        Self {
            value: person.id.to_string(),
            label: full_name.clone(),
            body: OptionBody {
                picture_url: person.picture_url.clone(),
                picture_alt: format!("Portrait of {}", full_name),
                name: full_name,
                profession: person.profession.clone(),
            },
        }
    }
}

impl RichSelectOption for PersonOption {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// One option per person, in list order
pub fn project_options(people: &[Person]) -> Vec<PersonOption> {
    people.iter().map(PersonOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, first: &str, last: &str, profession: &str) -> Person {
        Person {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: String::new(),
            profession: profession.to_string(),
            picture_url: format!("https://example.com/{}.png", id),
        }
    }

    #[test]
    fn test_label_is_full_name() {
        let option = PersonOption::from(&person(1, "Ada", "Lovelace", "Mathematician"));
        assert_eq!(option.label, "Ada Lovelace");
        assert_eq!(option.body.name, "Ada Lovelace");
    }

    #[test]
    fn test_value_is_id_string() {
        let option = PersonOption::from(&person(42, "Ada", "Lovelace", ""));
        assert_eq!(option.value, "42");
        assert_eq!(RichSelectOption::value(&option), "42");
    }

    #[test]
    fn test_body_content() {
        let option = PersonOption::from(&person(3, "Alan", "Turing", "Cryptanalyst"));
        assert_eq!(option.body.picture_url, "https://example.com/3.png");
        assert_eq!(option.body.picture_alt, "Portrait of Alan Turing");
        assert_eq!(option.body.profession, "Cryptanalyst");
    }

    #[test]
    fn test_projection_keeps_order() {
        let people = vec![
            person(5, "Grace", "Hopper", "Admiral"),
            person(2, "Ada", "Lovelace", "Mathematician"),
            person(9, "Alan", "Turing", "Cryptanalyst"),
        ];
        let values: Vec<String> = project_options(&people)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["5", "2", "9"]);
    }

    #[test]
    fn test_projection_is_repeatable() {
        let people = vec![
            person(1, "Ada", "Lovelace", "Mathematician"),
            person(2, "Alan", "Turing", "Cryptanalyst"),
        ];
        assert_eq!(project_options(&people), project_options(&people));
    }

    #[test]
    fn test_empty_list() {
        assert!(project_options(&[]).is_empty());
    }

    #[test]
    fn test_missing_fields_pass_through() {
        let mut incomplete = person(7, "", "", "");
        incomplete.picture_url = String::new();
        let option = PersonOption::from(&incomplete);
        assert_eq!(option.label, " ");
        assert_eq!(option.body.picture_url, "");
        assert_eq!(option.body.profession, "");
    }
}
