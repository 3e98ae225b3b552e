pub mod d100_admin_event_list;
