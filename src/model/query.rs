use dicom::core::dictionary::DataDictionary;
use dicom::core::header::Header;
use dicom::core::value::Value;
use dicom::core::{Tag, VR};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::InMemDicomObject;

use super::catalogue::{self, ALL_GROUP, PIXEL_DATA};
use super::study::MetadataEntry;
use crate::utils::{format_element_value, stringify_value};

pub fn display_name(tag: Tag) -> String {
    StandardDataDictionary
        .by_tag(tag)
        .map(|entry| entry.alias.to_owned())
        .unwrap_or_else(|| "Unknown".to_owned())
}

fn entry_for<I, P>(tag: Tag, vr: VR, value: &Value<I, P>) -> MetadataEntry {
    let name = display_name(tag);
    let raw = stringify_value(value, vr);
    let value = format_element_value(&name, &raw);
    MetadataEntry { tag, name, value }
}

/// Every element except pixel data, alphabetical by display name. Feeds the
/// selectable element catalogue, so the order is independent of the
/// dataset's own iteration order.
pub fn list_all(dataset: &InMemDicomObject) -> Vec<MetadataEntry> {
    let mut entries: Vec<MetadataEntry> = dataset
        .iter()
        .filter(|element| element.tag() != PIXEL_DATA)
        .map(|element| entry_for(element.tag(), element.vr(), element.value()))
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Elements of one catalogue group, in the group's curated order; tags the
/// dataset does not carry are skipped. `"All"` resolves to every element
/// except pixel data in dataset order. Unknown groups yield `None`.
pub fn by_group(dataset: &InMemDicomObject, group: &str) -> Option<Vec<MetadataEntry>> {
    if group == ALL_GROUP {
        return Some(
            dataset
                .iter()
                .filter(|element| element.tag() != PIXEL_DATA)
                .map(|element| entry_for(element.tag(), element.vr(), element.value()))
                .collect(),
        );
    }

    catalogue::group_tags(group).map(|tags| {
        tags.iter()
            .filter_map(|&tag| dataset.element(tag).ok())
            .map(|element| entry_for(element.tag(), element.vr(), element.value()))
            .collect()
    })
}

/// Case-insensitive substring match against the display name or the raw
/// stringified value, in dataset order. The empty term matches everything;
/// an empty result is a valid outcome, not an error.
pub fn search(dataset: &InMemDicomObject, term: &str) -> Vec<MetadataEntry> {
    let needle = term.to_lowercase();
    dataset
        .iter()
        .filter(|element| element.tag() != PIXEL_DATA)
        .filter_map(|element| {
            let tag = element.tag();
            let name = display_name(tag);
            let raw = stringify_value(element.value(), element.vr());
            let matched = name.to_lowercase().contains(&needle)
                || raw.to_lowercase().contains(&needle);
            matched.then(|| {
                let value = format_element_value(&name, &raw);
                MetadataEntry { tag, name, value }
            })
        })
        .collect()
}

/// The single element whose display name matches exactly (catalogue
/// selection path).
pub fn by_name(dataset: &InMemDicomObject, name: &str) -> Option<MetadataEntry> {
    dataset
        .iter()
        .filter(|element| element.tag() != PIXEL_DATA)
        .find(|element| display_name(element.tag()) == name)
        .map(|element| entry_for(element.tag(), element.vr(), element.value()))
}

/// Alphabetical element-name catalogue; names shared by several tags
/// collapse into one entry.
pub fn element_names(dataset: &InMemDicomObject) -> Vec<String> {
    let mut names: Vec<String> = list_all(dataset)
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    names.dedup();
    names
}
