#[macro_export]
macro_rules! course {
    ( $id:expr, $title:expr $(, $prereq:expr )* ) => {
        $crate::Course {
            id: $id.into(),
            title: $title.into(),
            prerequisites: vec![ $( $prereq.into() ),* ],
        }
    };
}
