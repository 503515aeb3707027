//! Static content of the NEXORA home page.
use crate::icons::Icon;

pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub struct Room {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub size: &'static str,
    pub capacity: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    /// Content above the image on wide screens.
    pub reverse: bool,
}

pub struct Venue {
    pub id: u32,
    pub name: &'static str,
    pub capacity: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

pub struct Amenity {
    pub icon: Icon,
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Restaurant {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub hours: &'static str,
    pub seats: &'static str,
    pub signature: &'static str,
}

pub struct Distance {
    pub icon: Icon,
    pub label: &'static str,
    pub time: &'static str,
    pub distance: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy)]
pub enum GalleryMotion {
    Left,
    Right,
    Up,
    Down,
    Scale,
}

pub struct GalleryImage {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub span: &'static str,
    pub mobile_span: &'static str,
    pub delay_ms: u64,
    pub motion: GalleryMotion,
    pub featured: bool,
}

#[derive(Clone)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

pub struct Offer {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub benefit: &'static str,
    pub validity: &'static str,
    pub featured: bool,
    pub gradient: &'static str,
    pub icon: Icon,
}

pub struct FooterLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub struct SocialLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
    pub hover: &'static str,
}

pub struct Partner {
    pub role: &'static str,
    pub name: &'static str,
}

pub struct ContactLine {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", path: "/" },
    NavItem { name: "Rooms", path: "/rooms" },
    NavItem { name: "Events", path: "/events" },
    NavItem { name: "Dining", path: "/dining" },
    NavItem { name: "Gallery", path: "/gallery" },
    NavItem { name: "About", path: "/about" },
    NavItem { name: "Contact", path: "/contact" },
];

pub const ROOMS: &[Room] = &[
    Room {
        id: 1,
        name: "Executive Suite",
        description: "Purposefully designed for corporate leaders who value clarity, comfort, and control.",
        size: "45 m²",
        capacity: "2 Guests",
        image: "/images/executive.jpg",
        features: &["Dedicated Workspace", "City View", "Express Check-in"],
        reverse: false,
    },
    Room {
        id: 2,
        name: "Boardroom Residence",
        description: "Where business and privacy exist in perfect architectural balance.",
        size: "65 m²",
        capacity: "4 Guests",
        image: "/images/boardroom.jpg",
        features: &["Private Meeting Area", "Boardroom Table", "Executive Lounge"],
        reverse: true,
    },
    Room {
        id: 3,
        name: "Corporate Deluxe",
        description: "A calm environment engineered for rest, preparation, and performance.",
        size: "55 m²",
        capacity: "3 Guests",
        image: "/images/deluxe.jpg",
        features: &["Panoramic View", "Work Pod", "Premium Amenities"],
        reverse: false,
    },
];

pub const VENUES: &[Venue] = &[
    Venue {
        id: 1,
        name: "Executive Boardroom",
        capacity: "20 Guests",
        image: "/images/boardroom.jpg",
        features: &["Boardroom Table", "4K Display", "Video Conference"],
    },
    Venue {
        id: 2,
        name: "Concourse Hall",
        capacity: "120 Guests",
        image: "/images/concourse.jpg",
        features: &["Stage Setup", "Built-in AV", "Breakout Rooms"],
    },
    Venue {
        id: 3,
        name: "Grand Ballroom",
        capacity: "450 Guests",
        image: "/images/ballroom.jpg",
        features: &["Pre-function Area", "Ballroom Lighting", "Dedicated Team"],
    },
];

pub const AMENITIES: &[Amenity] = &[
    Amenity { icon: Icon::Wifi, name: "High-Speed WiFi", description: "1 Gbps Fiber Connection" },
    Amenity { icon: Icon::Briefcase, name: "Business Center", description: "24/7 Executive Lounge" },
    Amenity { icon: Icon::Headphones, name: "Concierge", description: "24/7 Dedicated Service" },
    Amenity { icon: Icon::Shield, name: "Security", description: "Private Floor Access" },
    Amenity { icon: Icon::Coffee, name: "Coffee Bar", description: "Premium Nespresso" },
    Amenity { icon: Icon::Droplet, name: "Luxury Bath", description: "BVLGARI Amenities" },
    Amenity { icon: Icon::Star, name: "Fitness Center", description: "24/7 Technogym" },
    Amenity { icon: Icon::Clock, name: "Express Service", description: "Mobile Check-in/out" },
];

pub const RESTAURANTS: &[Restaurant] = &[
    Restaurant {
        id: 1,
        name: "Boardroom Grill",
        description: "Where business meets exceptional cuisine. Designed for executive lunches and private discussions.",
        image: "/images/boardroom.jpg",
        hours: "12pm - 11pm",
        seats: "40 Seats",
        signature: "Wagyu Tasting Menu",
    },
    Restaurant {
        id: 2,
        name: "Executive Lounge",
        description: "An elegant environment for meetings, relaxation, and refined international dining.",
        image: "/images/executive.jpg",
        hours: "6am - 12am",
        seats: "80 Seats",
        signature: "Artisanal Coffee Program",
    },
    Restaurant {
        id: 3,
        name: "Sky Executive Bar",
        description: "Premium cocktails and skyline views tailored for networking and corporate evenings.",
        image: "/images/skybar.webp",
        hours: "5pm - 2am",
        seats: "120 Seats",
        signature: "Molecular Mixology",
    },
];

pub const DISTANCES: &[Distance] = &[
    Distance {
        icon: Icon::Navigation,
        label: "International Airport",
        time: "25 minutes",
        distance: "18 km",
        description: "Direct highway access",
    },
    Distance {
        icon: Icon::MapPin,
        label: "Business District Station",
        time: "5 minutes walk",
        distance: "400 m",
        description: "Express trains every 10 mins",
    },
    Distance {
        icon: Icon::Briefcase,
        label: "Financial District",
        time: "8 minutes",
        distance: "2.5 km",
        description: "Heart of corporate hub",
    },
    Distance {
        icon: Icon::Truck,
        label: "Major Highways",
        time: "2 minutes",
        distance: "500 m",
        description: "I-95 & I-395 access",
    },
];

pub const NEARBY_CORPORATES: &[&str] = &[
    "Goldman Sachs HQ",
    "JPMorgan Chase",
    "Deloitte",
    "PwC",
    "Ernst & Young",
    "Morgan Stanley",
];

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        id: 1,
        src: "/images/gallerylobby.jpg",
        alt: "Hotel Lobby",
        title: "Grand Lobby",
        span: "md:col-span-1 md:row-span-1",
        mobile_span: "",
        delay_ms: 100,
        motion: GalleryMotion::Left,
        featured: false,
    },
    GalleryImage {
        id: 2,
        src: "/images/galleryrestaurant.webp",
        alt: "Restaurant",
        title: "Signature Restaurant",
        span: "md:col-span-1 md:row-span-1",
        mobile_span: "",
        delay_ms: 200,
        motion: GalleryMotion::Right,
        featured: false,
    },
    GalleryImage {
        id: 3,
        src: "/images/galleryatrium.jpg",
        alt: "Atrium",
        title: "Sky Atrium",
        span: "md:col-span-2 md:row-span-2",
        mobile_span: "col-span-2 row-span-2",
        delay_ms: 0,
        motion: GalleryMotion::Up,
        featured: true,
    },
    GalleryImage {
        id: 4,
        src: "/images/gallerysuites.webp",
        alt: "Executive Suites",
        title: "Executive Suites",
        span: "md:col-span-2 md:row-span-1",
        mobile_span: "col-span-2",
        delay_ms: 300,
        motion: GalleryMotion::Scale,
        featured: false,
    },
    GalleryImage {
        id: 5,
        src: "/images/galleryroom.jpg",
        alt: "Guest Room",
        title: "Premier Room",
        span: "md:col-span-1 md:row-span-1",
        mobile_span: "",
        delay_ms: 400,
        motion: GalleryMotion::Up,
        featured: false,
    },
    GalleryImage {
        id: 6,
        src: "/images/gallerybar.jpg",
        alt: "Sky Bar",
        title: "Sky Bar",
        span: "md:col-span-1 md:row-span-1",
        mobile_span: "",
        delay_ms: 500,
        motion: GalleryMotion::Down,
        featured: false,
    },
    GalleryImage {
        id: 7,
        src: "/images/ballroom.jpg",
        alt: "Ballroom",
        title: "Ballroom",
        span: "md:col-span-2 md:row-span-1",
        mobile_span: "col-span-2",
        delay_ms: 600,
        motion: GalleryMotion::Scale,
        featured: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "David Chen",
        role: "Managing Director",
        company: "Goldman Sachs",
        content: "NEXORA has become our preferred destination for executive stays. The privacy, discretion and business amenities are second to none. Every detail reflects precision and excellence.",
        image: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Testimonial {
        name: "Sarah Thompson",
        role: "VP Operations",
        company: "Deloitte",
        content: "Our annual leadership summit at NEXORA exceeded expectations. The service team anticipates needs before they arise. A seamless experience from arrival to departure.",
        image: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Regional Director",
        company: "JPMorgan Chase",
        content: "For executives who value efficiency and elegance, NEXORA sets the global benchmark. It's more than a stay, it's a refined corporate experience.",
        image: "https://randomuser.me/api/portraits/men/65.jpg",
    },
    Testimonial {
        name: "Jennifer Wu",
        role: "Chief Strategy Officer",
        company: "McKinsey & Company",
        content: "The attention to detail and personalized service creates an environment where business objectives are achieved effortlessly. Our global team feels right at home.",
        image: "https://randomuser.me/api/portraits/women/68.jpg",
    },
    Testimonial {
        name: "Robert Hayes",
        role: "Senior Partner",
        company: "Boston Consulting Group",
        content: "NEXORA understands the needs of modern executives. The seamless integration of work and relaxation makes it our top choice for extended stays.",
        image: "https://randomuser.me/api/portraits/men/52.jpg",
    },
];

pub const OFFERS: &[Offer] = &[
    Offer {
        id: 1,
        title: "Corporate Dining",
        description: "25% savings at all restaurants.",
        image: "/images/dining.avif",
        benefit: "Save 25%",
        validity: "Year-round",
        featured: false,
        gradient: "from-gold/30 to-ink/90",
        icon: Icon::Star,
    },
    Offer {
        id: 2,
        title: "Executive Retreat",
        description: "20% off best available rates.",
        image: "/images/executiveretreat.avif",
        benefit: "20% Off",
        validity: "Until Dec 2025",
        featured: true,
        gradient: "from-gold/40 to-ink/95",
        icon: Icon::Briefcase,
    },
    Offer {
        id: 3,
        title: "Suite Upgrade",
        description: "Complimentary executive suite upgrade.",
        image: "/images/suites.avif",
        benefit: "Free Upgrade",
        validity: "Subject to availability",
        featured: false,
        gradient: "from-gold/30 to-ink/90",
        icon: Icon::Star,
    },
];

pub const FOOTER_LINKS: &[FooterLink] = &[
    FooterLink { name: "Luxury Suites", path: "/rooms" },
    FooterLink { name: "Executive Dining", path: "/dining" },
    FooterLink { name: "Corporate Events", path: "/events" },
    FooterLink { name: "Exclusive Offers", path: "/offers" },
    FooterLink { name: "Concierge", path: "/contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Linkedin,
        href: "https://linkedin.com/company/nexora",
        label: "LinkedIn",
        hover: "hover:text-[#0077B5]",
    },
    SocialLink {
        icon: Icon::Twitter,
        href: "https://twitter.com/nexorahotel",
        label: "Twitter",
        hover: "hover:text-[#1DA1F2]",
    },
    SocialLink {
        icon: Icon::Instagram,
        href: "https://instagram.com/nexorahotel",
        label: "Instagram",
        hover: "hover:text-[#E4405F]",
    },
    SocialLink {
        icon: Icon::Facebook,
        href: "https://facebook.com/nexorahotel",
        label: "Facebook",
        hover: "hover:text-[#1877F2]",
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner { role: "Global Leader", name: "Goldman Sachs" },
    Partner { role: "Strategic Partner", name: "Deloitte" },
    Partner { role: "Financial Partner", name: "JPMorgan" },
    Partner { role: "Consulting Partner", name: "McKinsey" },
];

pub const CONTACT_LINES: &[ContactLine] = &[
    ContactLine { icon: Icon::MapPin, label: "Location", value: "Pokhara, Nepal", href: None },
    ContactLine {
        icon: Icon::Phone,
        label: "Call Us",
        value: "+977-9800000000",
        href: Some("tel:+977-9800000000"),
    },
    ContactLine {
        icon: Icon::Mail,
        label: "Email",
        value: "reservations@nexora.com",
        href: Some("mailto:reservations@nexora.com"),
    },
    ContactLine { icon: Icon::Clock, label: "Concierge", value: "24/7 Executive Service", href: None },
    ContactLine {
        icon: Icon::MessageCircle,
        label: "WhatsApp",
        value: "+977-9800000000",
        href: Some("https://wa.me/9800000000"),
    },
];

/// Detail page of a room, linked from its card.
pub fn room_url(room: &Room) -> String {
    format!("/rooms/{}", room.id)
}

pub fn venue_url(venue: &Venue) -> String {
    format!("/events/{}", venue.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_urls() {
        assert_eq!(room_url(&ROOMS[1]), "/rooms/2");
        assert_eq!(venue_url(&VENUES[2]), "/events/3");
    }

    #[test]
    fn test_gallery_ids_are_unique() {
        let mut ids: Vec<_> = GALLERY.iter().map(|image| image.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GALLERY.len());
    }

    #[test]
    fn test_images_live_under_images_prefix() {
        let local = ROOMS
            .iter()
            .map(|room| room.image)
            .chain(VENUES.iter().map(|venue| venue.image))
            .chain(RESTAURANTS.iter().map(|restaurant| restaurant.image))
            .chain(GALLERY.iter().map(|image| image.src))
            .chain(OFFERS.iter().map(|offer| offer.image));

        for path in local {
            assert!(path.starts_with("/images/"), "{path}");
        }
    }
}
