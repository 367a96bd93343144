mod profile;


pub use profile::{
    annotate_app_armor, app_armor_annotations, is_app_armor_annotation_present,
    is_app_armor_annotation_present_in_object,
};
