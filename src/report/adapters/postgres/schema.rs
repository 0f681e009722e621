//! Diesel schema for the to-do tables read by reporting.

diesel::table! {
    /// One to-do list per user.
    todo_lists (id) {
        /// List identifier.
        id -> Uuid,
        /// Owning user identifier.
        user_id -> Uuid,
    }
}

diesel::table! {
    /// Tasks belonging to a to-do list.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning list identifier.
        todo_list_id -> Uuid,
        /// Whether the task has been completed.
        completion_status -> Bool,
        /// Completion timestamp, set when the task is completed.
        completion_date_time -> Nullable<Timestamptz>,
        /// Task deadline.
        due_date_time -> Timestamptz,
    }
}

diesel::joinable!(tasks -> todo_lists (todo_list_id));
diesel::allow_tables_to_appear_in_same_query!(todo_lists, tasks);
