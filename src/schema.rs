// Read-only view of the externally managed `quote` table.

diesel::table! {
    quote (id) {
        id -> Integer,
        title -> Text,
        number -> Text,
        issued_at -> Text,
    }
}
