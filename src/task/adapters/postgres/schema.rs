//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Uuid,
        /// Insertion sequence used for store iteration order.
        seq -> Int8,
        /// Task title, unique across rows.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Free-form status token, unbounded like the in-memory store.
        status -> Text,
    }
}
