// Diesel table definitions for the qeval database.

diesel::table! {
    text_samples (id) {
        id -> Text,
        text -> Text,
        source -> Nullable<Text>,
        topic -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::table! {
    annotations (id) {
        id -> Text,
        text_sample_id -> Text,
        quality_level -> Text,
        issue_tags -> Text,
        notes -> Nullable<Text>,
        annotator_id -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    pairwise_comparisons (id) {
        id -> Text,
        text_a_id -> Text,
        text_b_id -> Text,
        better_text_id -> Text,
        notes -> Nullable<Text>,
        annotator_id -> Text,
        created_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    annotations,
    pairwise_comparisons,
    text_samples,
);
