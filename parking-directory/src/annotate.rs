use crate::columns::{ColumnRegistry, Field};
use crate::table::{Badge, EntityTable};
use crate::types::{is_yes, Amenity, PassType};

/// Fills the two summary columns with badges for the Y/N flags of each row,
/// and the amenity summary header with a legend of every amenity badge.
///
/// Running it more than once leaves the table unchanged.
pub fn annotate(registry: &ColumnRegistry, table: &mut EntityTable) {
    let pass_col = registry.index(Field::ParkingPass);
    let misc_col = registry.index(Field::Misc);
    let mut added = 0;

    for row in 0..table.row_count() {
        let mut badges = Vec::new();
        for pass in PassType::ALL {
            if flag_set(registry, table, row, Field::Pass(pass)) {
                badges.push((pass_col, Badge::pass(pass)));
            }
        }
        for amenity in Amenity::ALL {
            if flag_set(registry, table, row, Field::Amenity(amenity)) {
                badges.push((misc_col, Badge::amenity(amenity)));
            }
        }

        for (col, badge) in badges {
            if let Some(cell) = table.cell_mut(row, col) {
                if cell.push_badge(badge) {
                    added += 1;
                }
            }
        }
    }

    if let Some(header) = table.header_mut(misc_col) {
        for amenity in Amenity::ALL {
            header.push_badge(Badge::amenity(amenity));
        }
    }

    log::debug!("annotated {} rows with {} badges", table.row_count(), added);
}

fn flag_set(registry: &ColumnRegistry, table: &EntityTable, row: usize, field: Field) -> bool {
    table
        .cell(row, registry.index(field))
        .is_some_and(|cell| is_yes(&cell.text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::tests::header_titles;
    use crate::table::BadgeKind;

    fn table_with_row(flags: &[(Field, &str)]) -> (ColumnRegistry, EntityTable) {
        let titles = header_titles();
        let row = titles
            .iter()
            .map(|title| {
                flags
                    .iter()
                    .find(|(field, _)| field.title() == title)
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| "N".to_string())
            })
            .collect();
        let mut table = EntityTable::new(titles, vec![row]);
        let registry = ColumnRegistry::resolve(&mut table).unwrap();
        (registry, table)
    }

    #[test]
    fn test_badges_follow_flags() {
        let (registry, mut table) = table_with_row(&[
            (Field::Pass(PassType::Blue), "Y"),
            (Field::Pass(PassType::Gold), "yes"),
            (Field::Amenity(Amenity::Ev), "Y"),
        ]);
        annotate(&registry, &mut table);

        let passes = &table.cell(0, registry.index(Field::ParkingPass)).unwrap().badges;
        assert_eq!(
            passes.iter().map(|b| b.kind).collect::<Vec<_>>(),
            vec![
                BadgeKind::Pass(PassType::Blue),
                BadgeKind::Pass(PassType::Gold)
            ]
        );
        let misc = &table.cell(0, registry.index(Field::Misc)).unwrap().badges;
        assert_eq!(misc.len(), 1);
        assert_eq!(misc[0].label, "EV Charging");
    }

    #[test]
    fn test_annotate_twice_is_idempotent() {
        let (registry, mut table) = table_with_row(&[(Field::Pass(PassType::Visitor), "Y")]);
        annotate(&registry, &mut table);
        let once = table.clone();
        annotate(&registry, &mut table);

        let col = registry.index(Field::ParkingPass);
        assert_eq!(table.cell(0, col), once.cell(0, col));
        assert_eq!(table.cell(0, col).unwrap().badges.len(), 1);
    }

    #[test]
    fn test_misc_header_legend() {
        let (registry, mut table) = table_with_row(&[]);
        annotate(&registry, &mut table);
        annotate(&registry, &mut table);

        let header = &table.column(registry.index(Field::Misc)).unwrap().header;
        assert_eq!(header.badges.len(), Amenity::ALL.len());
    }
}
