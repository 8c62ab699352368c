//! Filling of one club's workbook: contact block, header row and one data row
//! per member, written into a fresh copy of the template.

use log::warn;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::{Category, ClubGroup, Registrant};

/// Token written into a cell to mark a boolean "yes" for that row/column
pub const PRESENCE_MARK: &str = "x";
/// Placeholder written into the allergies column of every member row
pub const ALLERGY_PLACEHOLDER: &str = "ingen";

// Fixed column letters of the template. Both known template variants share the
// same columns and only differ in row positions and the consent label.
const COL_LICENSE: &str = "A";
const COL_NAME: &str = "B";
const COL_GYMNAST: &str = "C";
const COL_COACH: &str = "D";
const COL_DOB: &str = "E";
const COL_LUNCH_SATURDAY: &str = "K";
const COL_LUNCH_SUNDAY: &str = "L";
const COL_TRANSPORT: &str = "M";
const COL_FRIDAY_TRAINING: &str = "N";
const COL_ALLERGIES: &str = "O";
const COL_CONSENT: &str = "P";

/// Columns that are unconditionally marked for every member
const LOGISTICS_COLUMNS: [&str; 5] = [
    COL_LUNCH_SATURDAY,
    COL_LUNCH_SUNDAY,
    COL_TRANSPORT,
    COL_FRIDAY_TRAINING,
    COL_CONSENT,
];

impl Category {
    /// Column of the age/category mark for this category. Coaches are marked
    /// in the Trener column, unrecognized categories get no mark at all.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Category::Rekrutt => Some("F"),
            Category::Age13To14 => Some("G"),
            Category::Age15To16 => Some("H"),
            Category::Age17To18 => Some("I"),
            Category::Senior => Some("J"),
            Category::Trener => Some(COL_COACH),
            Category::Other(_) => None,
        }
    }
}

/// Cell layout of a template variant.
///
/// The known templates only differ in the position of the header row, the
/// first data row below it and the label of the photo/film consent column, so
/// one parameterized filler covers all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Row of the fixed header labels
    pub header_row: u32,
    /// Row of the first member; one row per member from here on
    pub first_data_row: u32,
    /// Label of the consent column in the header row
    pub consent_label: String,
}

impl SheetLayout {
    /// Layout of the current template ("Pameldingskjema-mal.xlsx")
    pub fn standard() -> Self {
        SheetLayout {
            header_row: 9,
            first_data_row: 10,
            consent_label: "Foto/filmtillatelse".to_owned(),
        }
    }

    /// Layout of the older template with the header one row further up and a
    /// shorter consent label
    pub fn legacy() -> Self {
        SheetLayout {
            header_row: 8,
            first_data_row: 9,
            consent_label: "Fototillatelse".to_owned(),
        }
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout::standard()
    }
}

/// Fill the first worksheet of `book` with the contact block, the header row
/// and one data row per member of `group`.
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user if the
/// workbook does not contain any worksheet.
pub fn fill(
    book: &mut Spreadsheet,
    group: &ClubGroup,
    layout: &SheetLayout,
) -> Result<(), String> {
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or("The template workbook does not contain any worksheet.")?;

    write_contact_block(sheet, &group.club);
    write_header_row(sheet, layout);
    for (offset, member) in group.members.iter().enumerate() {
        write_member_row(sheet, layout.first_data_row + offset as u32, member);
    }

    Ok(())
}

fn set_cell(sheet: &mut Worksheet, column: &str, row: u32, value: &str) {
    sheet
        .get_cell_mut(format!("{}{}", column, row).as_str())
        .set_value(value);
}

/// Contact details block in the top left corner of the sheet. Besides the
/// club name the block holds placeholder contact data, which the clubs
/// replace themselves before submitting the form.
fn write_contact_block(sheet: &mut Worksheet, club: &str) {
    set_cell(sheet, "C", 3, club);
    set_cell(sheet, "C", 4, "Kontaktperson Navn");
    set_cell(sheet, "C", 5, "kontakt@example.com");
    set_cell(sheet, "C", 6, "12345678");
}

fn write_header_row(sheet: &mut Worksheet, layout: &SheetLayout) {
    let row = layout.header_row;
    set_cell(sheet, COL_LICENSE, row, "Lisensnr.");
    set_cell(sheet, COL_NAME, row, "Navn");
    set_cell(sheet, COL_GYMNAST, row, "Gymnast");
    set_cell(sheet, COL_COACH, row, "Trener");
    set_cell(sheet, COL_DOB, row, "Født.");
    set_cell(sheet, "F", row, "Rekrutt");
    set_cell(sheet, "G", row, "13-14");
    set_cell(sheet, "H", row, "15-16");
    set_cell(sheet, "I", row, "17-18");
    set_cell(sheet, "J", row, "Senior");
    set_cell(sheet, COL_LUNCH_SATURDAY, row, "Lunsj lørdag");
    set_cell(sheet, COL_LUNCH_SUNDAY, row, "Lunsj søndag");
    set_cell(sheet, COL_TRANSPORT, row, "Transport");
    set_cell(sheet, COL_FRIDAY_TRAINING, row, "Trening fredag");
    set_cell(sheet, COL_ALLERGIES, row, "Allergier");
    set_cell(sheet, COL_CONSENT, row, &layout.consent_label);
}

fn write_member_row(sheet: &mut Worksheet, row: u32, member: &Registrant) {
    set_cell(sheet, COL_LICENSE, row, &member.license_number);
    set_cell(sheet, COL_NAME, row, &member.full_name);

    // Exactly one of the Gymnast/Trener columns gets the mark, the other one
    // is cleared.
    if member.category.is_coach() {
        set_cell(sheet, COL_GYMNAST, row, "");
        set_cell(sheet, COL_COACH, row, PRESENCE_MARK);
    } else {
        set_cell(sheet, COL_GYMNAST, row, PRESENCE_MARK);
        set_cell(sheet, COL_COACH, row, "");
    }

    set_cell(sheet, COL_DOB, row, &member.dob);

    match member.category.column() {
        Some(column) => set_cell(sheet, column, row, PRESENCE_MARK),
        None => warn!(
            "Unrecognized category '{}' of '{}', no age column marked.",
            member.category, member.full_name
        ),
    }

    for column in LOGISTICS_COLUMNS.iter() {
        set_cell(sheet, column, row, PRESENCE_MARK);
    }
    set_cell(sheet, COL_ALLERGIES, row, ALLERGY_PLACEHOLDER);
}

#[cfg(test)]
mod tests {
    use super::{fill, SheetLayout, ALLERGY_PLACEHOLDER, PRESENCE_MARK};
    use crate::{Category, ClubGroup, Registrant};
    use umya_spreadsheet::Spreadsheet;

    fn registrant(name: &str, category: &str, license: &str, dob: &str) -> Registrant {
        Registrant {
            full_name: name.to_owned(),
            club: "Oslo Turnforening".to_owned(),
            category: Category::from(String::from(category)),
            license_number: license.to_owned(),
            dob: dob.to_owned(),
        }
    }

    fn filled_book(members: Vec<Registrant>, layout: &SheetLayout) -> Spreadsheet {
        let mut book = umya_spreadsheet::new_file();
        let group = ClubGroup {
            club: "Oslo Turnforening".to_owned(),
            members,
        };
        fill(&mut book, &group, layout).unwrap();
        book
    }

    fn value(book: &Spreadsheet, coordinate: &str) -> String {
        book.get_sheet(&0).unwrap().get_value(coordinate)
    }

    #[test]
    fn contact_block_is_written() {
        let book = filled_book(vec![], &SheetLayout::standard());

        assert_eq!(value(&book, "C3"), "Oslo Turnforening");
        assert_eq!(value(&book, "C4"), "Kontaktperson Navn");
        assert_eq!(value(&book, "C5"), "kontakt@example.com");
        assert_eq!(value(&book, "C6"), "12345678");
    }

    #[test]
    fn header_row_is_written() {
        let book = filled_book(vec![], &SheetLayout::standard());

        assert_eq!(value(&book, "A9"), "Lisensnr.");
        assert_eq!(value(&book, "B9"), "Navn");
        assert_eq!(value(&book, "C9"), "Gymnast");
        assert_eq!(value(&book, "D9"), "Trener");
        assert_eq!(value(&book, "E9"), "Født.");
        assert_eq!(value(&book, "F9"), "Rekrutt");
        assert_eq!(value(&book, "G9"), "13-14");
        assert_eq!(value(&book, "H9"), "15-16");
        assert_eq!(value(&book, "I9"), "17-18");
        assert_eq!(value(&book, "J9"), "Senior");
        assert_eq!(value(&book, "K9"), "Lunsj lørdag");
        assert_eq!(value(&book, "L9"), "Lunsj søndag");
        assert_eq!(value(&book, "M9"), "Transport");
        assert_eq!(value(&book, "N9"), "Trening fredag");
        assert_eq!(value(&book, "O9"), "Allergier");
        assert_eq!(value(&book, "P9"), "Foto/filmtillatelse");
    }

    #[test]
    fn member_rows_follow_input_order() {
        let book = filled_book(
            vec![
                registrant("Amalie Berg", "senior", "10001", "2002-03-14"),
                registrant("Nora Eriksen", "13-14", "10003", "2011-11-23"),
            ],
            &SheetLayout::standard(),
        );

        assert_eq!(value(&book, "A10"), "10001");
        assert_eq!(value(&book, "B10"), "Amalie Berg");
        assert_eq!(value(&book, "E10"), "2002-03-14");
        assert_eq!(value(&book, "A11"), "10003");
        assert_eq!(value(&book, "B11"), "Nora Eriksen");
        assert_eq!(value(&book, "E11"), "2011-11-23");
    }

    #[test]
    fn gymnast_and_coach_marks_are_mutually_exclusive() {
        let book = filled_book(
            vec![
                registrant("Amalie Berg", "senior", "10001", "2002-03-14"),
                registrant("Kari Holm", "trener", "10004", "1985-01-30"),
            ],
            &SheetLayout::standard(),
        );

        assert_eq!(value(&book, "C10"), PRESENCE_MARK);
        assert_eq!(value(&book, "D10"), "");
        assert_eq!(value(&book, "C11"), "");
        assert_eq!(value(&book, "D11"), PRESENCE_MARK);
    }

    #[test]
    fn senior_is_marked_in_the_senior_column_only() {
        let book = filled_book(
            vec![registrant("Amalie Berg", "senior", "10001", "2002-03-14")],
            &SheetLayout::standard(),
        );

        assert_eq!(value(&book, "F10"), "");
        assert_eq!(value(&book, "G10"), "");
        assert_eq!(value(&book, "H10"), "");
        assert_eq!(value(&book, "I10"), "");
        assert_eq!(value(&book, "J10"), PRESENCE_MARK);
    }

    #[test]
    fn every_age_bracket_maps_to_its_column() {
        let book = filled_book(
            vec![
                registrant("A", "rekrutt", "1", "2015-01-01"),
                registrant("B", "13-14", "2", "2012-01-01"),
                registrant("C", "15-16", "3", "2010-01-01"),
                registrant("D", "17-18", "4", "2008-01-01"),
            ],
            &SheetLayout::standard(),
        );

        assert_eq!(value(&book, "F10"), PRESENCE_MARK);
        assert_eq!(value(&book, "G11"), PRESENCE_MARK);
        assert_eq!(value(&book, "H12"), PRESENCE_MARK);
        assert_eq!(value(&book, "I13"), PRESENCE_MARK);
    }

    #[test]
    fn coach_has_no_age_bracket_mark() {
        let book = filled_book(
            vec![registrant("Kari Holm", "trener", "10004", "1985-01-30")],
            &SheetLayout::standard(),
        );

        for column in ["F", "G", "H", "I", "J"].iter() {
            assert_eq!(value(&book, &format!("{}10", column)), "");
        }
    }

    #[test]
    fn unrecognized_category_is_a_silent_no_op() {
        let book = filled_book(
            vec![registrant("Ola Nygaard", "veteran", "10006", "1970-05-17")],
            &SheetLayout::standard(),
        );

        // treated as a gymnast in the Gymnast/Trener pair
        assert_eq!(value(&book, "C10"), PRESENCE_MARK);
        assert_eq!(value(&book, "D10"), "");
        // but no age column mark
        for column in ["F", "G", "H", "I", "J"].iter() {
            assert_eq!(value(&book, &format!("{}10", column)), "");
        }
        // logistics columns and allergies are still filled
        assert_eq!(value(&book, "K10"), PRESENCE_MARK);
        assert_eq!(value(&book, "O10"), ALLERGY_PLACEHOLDER);
    }

    #[test]
    fn logistics_columns_are_always_marked() {
        let book = filled_book(
            vec![
                registrant("Amalie Berg", "senior", "10001", "2002-03-14"),
                registrant("Kari Holm", "trener", "10004", "1985-01-30"),
            ],
            &SheetLayout::standard(),
        );

        for row in [10u32, 11].iter() {
            for column in ["K", "L", "M", "N", "P"].iter() {
                assert_eq!(value(&book, &format!("{}{}", column, row)), PRESENCE_MARK);
            }
            assert_eq!(value(&book, &format!("O{}", row)), ALLERGY_PLACEHOLDER);
        }
    }

    #[test]
    fn legacy_layout_shifts_rows_and_consent_label() {
        let book = filled_book(
            vec![registrant("Amalie Berg", "senior", "10001", "2002-03-14")],
            &SheetLayout::legacy(),
        );

        assert_eq!(value(&book, "A8"), "Lisensnr.");
        assert_eq!(value(&book, "P8"), "Fototillatelse");
        assert_eq!(value(&book, "B9"), "Amalie Berg");
        assert_eq!(value(&book, "J9"), PRESENCE_MARK);
        // nothing at the standard layout's positions
        assert_eq!(value(&book, "B10"), "");
    }

    #[test]
    fn custom_consent_label_is_used() {
        let layout = SheetLayout {
            consent_label: "Samtykke".to_owned(),
            ..SheetLayout::standard()
        };
        let book = filled_book(vec![], &layout);
        assert_eq!(value(&book, "P9"), "Samtykke");
    }
}
