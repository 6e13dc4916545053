//! Hardcoded fallback content
//!
//! Used whenever the content source is unconfigured or a query fails, so the
//! page always renders a complete studio showcase. Ids are unique per list.

use super::model::{Course, GalleryImage, ImageRef, Service, Testimonial};

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "1".into(),
            title: "Nail Art & Care".into(),
            description: "Professional nail art, manicures, pedicures, and nail extensions \
                          with premium products and creative designs that express your unique style."
                .into(),
            features: vec![
                "Custom Nail Art".into(),
                "Gel Polish".into(),
                "Nail Extensions".into(),
                "Cuticle Care".into(),
                "Hand Massage".into(),
                "Nail Health Analysis".into(),
            ],
            image: ImageRef::None,
            popular: true,
        },
        Service {
            id: "2".into(),
            title: "Eyelash Extensions".into(),
            description: "Transform your eyes with our premium eyelash extensions. From natural \
                          to dramatic looks with professional application and long-lasting results."
                .into(),
            features: vec![
                "Classic Lashes".into(),
                "Volume Lashes".into(),
                "Hybrid Lashes".into(),
                "Lash Lifts".into(),
                "Lash Tinting".into(),
                "Aftercare Kit".into(),
            ],
            image: ImageRef::None,
            popular: true,
        },
        Service {
            id: "3".into(),
            title: "Permanent Makeup".into(),
            description: "Korean BB Glow, eyebrow microblading, and semi-permanent makeup for \
                          effortless beauty every day with natural-looking results."
                .into(),
            features: vec![
                "Korean BB Glow".into(),
                "Eyebrow Microblading".into(),
                "Lip Blushing".into(),
                "Eyeliner Tattooing".into(),
                "Touch-up Sessions".into(),
                "Color Matching".into(),
            ],
            image: ImageRef::None,
            popular: false,
        },
    ]
}

pub fn gallery() -> Vec<GalleryImage> {
    let entries = [
        ("1", "Professional nail art design", "Nail Art"),
        ("2", "Eyelash extensions close-up", "Eyelash Extensions"),
        ("3", "Nail care treatment", "Nail Care"),
        ("4", "Permanent makeup application", "Permanent Makeup"),
        ("5", "Luxury nail design", "Nail Art"),
        ("6", "Volume lashes application", "Eyelash Extensions"),
    ];
    entries
        .into_iter()
        .map(|(id, alt, category)| GalleryImage {
            id: id.into(),
            image: ImageRef::None,
            alt: alt.into(),
            category: category.into(),
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".into(),
            name: "Sarah Johnson".into(),
            role: "Regular Client".into(),
            image: ImageRef::None,
            rating: 5,
            text: "I've been coming to i Nails for over a year now, and I'm consistently \
                   amazed by their attention to detail. The nail art is absolutely stunning, \
                   and the eyelash extensions last for weeks while looking completely natural."
                .into(),
            service: "Nail Art & Eyelash Extensions".into(),
        },
        Testimonial {
            id: "2".into(),
            name: "Maria Rodriguez".into(),
            role: "Course Graduate".into(),
            image: ImageRef::None,
            rating: 5,
            text: "The eyelash extension course was life-changing! The instructors were \
                   incredibly knowledgeable and patient. I now have my own successful lash \
                   business thanks to the skills I learned here."
                .into(),
            service: "Eyelash Extension Course".into(),
        },
        Testimonial {
            id: "3".into(),
            name: "Emily Chen".into(),
            role: "Beauty Enthusiast".into(),
            image: ImageRef::None,
            rating: 5,
            text: "The Korean BB Glow treatment was absolutely amazing! My skin looks \
                   flawless without makeup. The staff is professional, and the studio has \
                   such a luxurious atmosphere."
                .into(),
            service: "Korean BB Glow".into(),
        },
    ]
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".into(),
            title: "Professional Eyelash Extensions Course".into(),
            duration: "3 Days".into(),
            students: "50+".into(),
            rating: 4.9,
            price: "$899".into(),
            image: ImageRef::None,
            description: "Master the art of eyelash extensions with our comprehensive 3-day \
                          course covering classic, volume, and hybrid techniques."
                .into(),
            highlights: vec![
                "Classic & Volume Lash Techniques".into(),
                "Proper Isolation Methods".into(),
                "Eye Mapping & Design".into(),
                "Adhesive & Tool Knowledge".into(),
                "Safety & Sanitation".into(),
                "Business & Marketing Tips".into(),
                "Certification Upon Completion".into(),
                "Starter Kit Included".into(),
            ],
            featured: true,
        },
        Course {
            id: "2".into(),
            title: "Advanced Nail Extensions Course".into(),
            duration: "4 Days".into(),
            students: "75+".into(),
            rating: 4.8,
            price: "$1,199".into(),
            image: ImageRef::None,
            description: "Learn professional nail extension techniques including gel, acrylic, \
                          and the latest nail art trends from industry experts."
                .into(),
            highlights: vec![
                "Gel & Acrylic Extensions".into(),
                "Nail Art & Design".into(),
                "Proper Nail Prep".into(),
                "Shaping & Filing Techniques".into(),
                "Color Theory & Application".into(),
                "Nail Health & Care".into(),
                "Client Consultation".into(),
                "Professional Kit Included".into(),
            ],
            featured: false,
        },
        Course {
            id: "3".into(),
            title: "Permanent Makeup Masterclass".into(),
            duration: "5 Days".into(),
            students: "40+".into(),
            rating: 4.9,
            price: "$1,499".into(),
            image: ImageRef::None,
            description: "An intensive masterclass in semi-permanent makeup covering Korean BB \
                          Glow, microblading, and lip blushing with supervised live practice."
                .into(),
            highlights: vec![
                "Korean BB Glow Technique".into(),
                "Eyebrow Microblading".into(),
                "Lip Blushing & Shading".into(),
                "Skin Analysis & Color Matching".into(),
                "Hygiene & Client Safety".into(),
                "Supervised Model Sessions".into(),
                "Certification Upon Completion".into(),
                "Machine & Pigment Kit Included".into(),
            ],
            featured: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids(ids: impl IntoIterator<Item = String>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id.clone()), "duplicate id {id}");
        }
    }

    #[test]
    fn ids_are_unique_within_each_list() {
        assert_unique_ids(services().into_iter().map(|s| s.id));
        assert_unique_ids(gallery().into_iter().map(|g| g.id));
        assert_unique_ids(testimonials().into_iter().map(|t| t.id));
        assert_unique_ids(courses().into_iter().map(|c| c.id));
    }

    #[test]
    fn services_are_sorted_popular_first() {
        let list = services();
        let first_regular = list.iter().position(|s| !s.popular).unwrap_or(list.len());
        assert!(
            list[first_regular..].iter().all(|s| !s.popular),
            "popular services must precede regular ones"
        );
    }

    #[test]
    fn course_list_has_three_entries() {
        assert_eq!(courses().len(), 3);
    }

    #[test]
    fn gallery_has_six_entries_without_remote_images() {
        let list = gallery();
        assert_eq!(list.len(), 6);
        assert!(list.iter().all(|g| g.image.is_none()));
    }

    #[test]
    fn testimonial_ratings_are_in_display_range() {
        assert!(testimonials().iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
