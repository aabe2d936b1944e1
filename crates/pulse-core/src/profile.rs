//! Placeholder profile shown on the profile screen.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: &'static str,
    pub handle: &'static str,
    pub avatar: &'static str,
    pub bio: &'static str,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,
}

impl Profile {
    pub fn placeholder() -> Self {
        Self {
            display_name: "John Doe",
            handle: "@johndoe",
            avatar: "person.crop.circle",
            bio: "iOS developer and coffee enthusiast. Building things one commit at a time.",
            posts: 128,
            followers: 1_024,
            following: 256,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::placeholder()
    }
}
