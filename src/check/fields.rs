//! Field compliance: exact name, modifier and canonical type match

use crate::model::ClassDescription;
use crate::report::{FailureType, ResultObserver};
use crate::runtime::{RuntimeClass, RuntimeField};

pub(crate) fn check_fields_compliance(
    desc: &ClassDescription,
    absolute_name: &str,
    class: &RuntimeClass,
    observer: &mut dyn ResultObserver,
) {
    for field in &desc.fields {
        match find_matching_field(class, &field.name) {
            None => {
                observer.notify_failure(
                    FailureType::MissingField,
                    &field.to_readable_string(absolute_name),
                );
            }
            Some(live) => {
                if live.modifiers != field.modifiers || live.type_name != field.field_type {
                    observer.notify_failure(
                        FailureType::MismatchField,
                        &field.to_readable_string(absolute_name),
                    );
                }
            }
        }
    }
}

fn find_matching_field<'a>(class: &'a RuntimeClass, name: &str) -> Option<&'a RuntimeField> {
    class.fields.iter().find(|field| field.name == name)
}
