//! Static sample data seeding each page list.

use chrono::{Duration, Utc};

use super::counted_flag::CountedFlag;
use super::list::ContentId;
use super::models::{
    Authenticity, Community, DuaAuthor, DuaRequest, Event, EventKind, EventLocation,
    EventOrganizer, Hadith, Post, PostAuthor, PostKind, Verse, WisdomEntry, WisdomKind,
};

pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: ContentId::from("post-1"),
            author: PostAuthor {
                name: "Ahmet Yılmaz".to_string(),
                avatar_url: None,
                verified: true,
            },
            content: "Bugün sabah namazından sonra okuduğum bu ayet çok etkiledi: \
                      \"Ve O, her şeye gücü yeten, her şeyi bilendir.\" (Bakara 2:109)"
                .to_string(),
            kind: PostKind::Text,
            media_url: None,
            category: "Ayetler".to_string(),
            tags: Vec::new(),
            likes: CountedFlag::new(false, 47),
            comments: 12,
            shares: 8,
            is_bookmarked: false,
            created_at: now - Duration::hours(2),
        },
        Post {
            id: ContentId::from("post-2"),
            author: PostAuthor {
                name: "Fatma Özkan".to_string(),
                avatar_url: None,
                verified: false,
            },
            content: "Cuma namazı sonrası cemaatle birlikte okuduğumuz dualar... \
                      Maşallah ne güzel bir atmosfer vardı."
                .to_string(),
            kind: PostKind::Image,
            media_url: Some("https://images.example.com/cuma.jpeg".to_string()),
            category: "İbadet".to_string(),
            tags: Vec::new(),
            likes: CountedFlag::new(true, 89),
            comments: 23,
            shares: 15,
            is_bookmarked: false,
            created_at: now - Duration::hours(4),
        },
        Post {
            id: ContentId::from("post-3"),
            author: PostAuthor {
                name: "Mehmet Demir".to_string(),
                avatar_url: None,
                verified: true,
            },
            content: "Hz. Peygamber (s.a.v) buyurdu: \"Mümin, insanların kendisinden \
                      emin olduğu kişidir.\""
                .to_string(),
            kind: PostKind::Text,
            media_url: None,
            category: "Hadisler".to_string(),
            tags: Vec::new(),
            likes: CountedFlag::new(false, 156),
            comments: 34,
            shares: 28,
            is_bookmarked: false,
            created_at: now - Duration::hours(6),
        },
    ]
}

pub fn sample_communities() -> Vec<Community> {
    let now = Utc::now();
    vec![
        Community {
            id: ContentId::from("community-1"),
            name: "İstanbul Cami Cemaati".to_string(),
            description: "İstanbul'daki camilerimizde bir araya gelen kardeşlerimizin \
                          buluşma noktası."
                .to_string(),
            category: "Yerel Cemaat".to_string(),
            is_private: false,
            cover_image: None,
            location: Some("İstanbul".to_string()),
            membership: CountedFlag::new(true, 1247),
            is_admin: false,
            recent_activity: "2 saat önce".to_string(),
            created_at: now - Duration::days(40),
        },
        Community {
            id: ContentId::from("community-2"),
            name: "Kur'an Okuma Grubu".to_string(),
            description: "Tecvid kurallarını pekiştirmek isteyenler için haftalık \
                          online dersler."
                .to_string(),
            category: "Eğitim".to_string(),
            is_private: false,
            cover_image: None,
            location: Some("Online".to_string()),
            membership: CountedFlag::new(true, 856),
            is_admin: true,
            recent_activity: "1 saat önce".to_string(),
            created_at: now - Duration::days(45),
        },
        Community {
            id: ContentId::from("community-3"),
            name: "Genç Müslümanlar".to_string(),
            description: "Gençlerin İslami değerler çerçevesinde bir araya geldiği \
                          topluluk."
                .to_string(),
            category: "Gençlik".to_string(),
            is_private: false,
            cover_image: None,
            location: None,
            membership: CountedFlag::new(false, 2341),
            is_admin: false,
            recent_activity: "30 dakika önce".to_string(),
            created_at: now - Duration::days(60),
        },
        Community {
            id: ContentId::from("community-4"),
            name: "Hadis Çalışma Grubu".to_string(),
            description: "Hadisleri inceleyip günlük hayata nasıl uygulayacağımızı \
                          tartıştığımız özel grup."
                .to_string(),
            category: "Eğitim".to_string(),
            is_private: true,
            cover_image: None,
            location: None,
            membership: CountedFlag::new(false, 423),
            is_admin: false,
            recent_activity: "4 saat önce".to_string(),
            created_at: now - Duration::days(30),
        },
    ]
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: ContentId::from("event-1"),
            title: "Gençlik Sohbeti: İmanın Şartları".to_string(),
            description: "Gençlere yönelik haftalık sohbet programı.".to_string(),
            kind: EventKind::Religious,
            date: "2025-03-07".to_string(),
            time: "20:00".to_string(),
            location: EventLocation {
                name: "Merkez Cami Konferans Salonu".to_string(),
                address: "Cami Sk. No:1".to_string(),
                city: "İstanbul".to_string(),
            },
            organizer: EventOrganizer {
                name: "Gençlik Kolları".to_string(),
                contact: Some("genclik@example.com".to_string()),
            },
            capacity: 150,
            attendance: CountedFlag::new(false, 87),
            price: 0,
            is_online: false,
            is_bookmarked: false,
            tags: vec!["gençlik".to_string(), "sohbet".to_string()],
        },
        Event {
            id: ContentId::from("event-2"),
            title: "Online Tecvid Atölyesi".to_string(),
            description: "Temel tecvid kuralları üzerine uygulamalı atölye.".to_string(),
            kind: EventKind::Workshop,
            date: "2025-03-12".to_string(),
            time: "19:00".to_string(),
            location: EventLocation {
                name: "Online".to_string(),
                address: String::new(),
                city: String::new(),
            },
            organizer: EventOrganizer {
                name: "Kur'an Okuma Grubu".to_string(),
                contact: None,
            },
            capacity: 60,
            attendance: CountedFlag::new(true, 42),
            price: 0,
            is_online: true,
            is_bookmarked: true,
            tags: vec!["tecvid".to_string(), "eğitim".to_string()],
        },
        Event {
            id: ContentId::from("event-3"),
            title: "Hayır Kermesi".to_string(),
            description: "Geliri ihtiyaç sahiplerine bağışlanacak kermes.".to_string(),
            kind: EventKind::Charity,
            date: "2025-03-15".to_string(),
            time: "10:00".to_string(),
            location: EventLocation {
                name: "Kültür Merkezi".to_string(),
                address: "Atatürk Cd. No:12".to_string(),
                city: "Ankara".to_string(),
            },
            organizer: EventOrganizer {
                name: "Sosyal Yardım Derneği".to_string(),
                contact: None,
            },
            capacity: 500,
            attendance: CountedFlag::new(false, 213),
            price: 25,
            is_online: false,
            is_bookmarked: false,
            tags: vec!["kermes".to_string(), "yardım".to_string()],
        },
    ]
}

pub fn sample_dua_requests() -> Vec<DuaRequest> {
    let now = Utc::now();
    vec![
        DuaRequest {
            id: ContentId::from("dua-1"),
            author: DuaAuthor {
                name: "Anonim".to_string(),
                is_anonymous: true,
            },
            title: "Annem için şifa duası".to_string(),
            content: "Annem geçirdiği ameliyat sonrası iyileşme sürecinde. Kendisi \
                      için dua etmenizi rica ediyorum."
                .to_string(),
            category: "Sağlık".to_string(),
            is_urgent: true,
            prayers: CountedFlag::new(false, 156),
            comments: 23,
            is_bookmarked: true,
            tags: vec!["şifa".to_string(), "aile".to_string(), "ameliyat".to_string()],
            created_at: now - Duration::hours(2),
        },
        DuaRequest {
            id: ContentId::from("dua-2"),
            author: DuaAuthor {
                name: "Mehmet Yılmaz".to_string(),
                is_anonymous: false,
            },
            title: "İş bulabilmek için".to_string(),
            content: "Uzun süredir iş arıyorum. Bana uygun bir iş bulabilmem için \
                      dualarınızı bekliyorum."
                .to_string(),
            category: "İş & Kariyer".to_string(),
            is_urgent: false,
            prayers: CountedFlag::new(true, 89),
            comments: 12,
            is_bookmarked: false,
            tags: vec!["iş".to_string(), "aile".to_string(), "geçim".to_string()],
            created_at: now - Duration::hours(5),
        },
        DuaRequest {
            id: ContentId::from("dua-3"),
            author: DuaAuthor {
                name: "Anonim".to_string(),
                is_anonymous: true,
            },
            title: "Evlilik için dua".to_string(),
            content: "Hayırlı bir eş bulabilmem ve mutlu bir yuva kurabilmem için \
                      dualarınızı istiyorum."
                .to_string(),
            category: "Aile".to_string(),
            is_urgent: false,
            prayers: CountedFlag::new(false, 234),
            comments: 45,
            is_bookmarked: true,
            tags: vec!["evlilik".to_string(), "yuva".to_string()],
            created_at: now - Duration::days(1),
        },
        DuaRequest {
            id: ContentId::from("dua-4"),
            author: DuaAuthor {
                name: "Ali Demir".to_string(),
                is_anonymous: false,
            },
            title: "Sınav başarısı için".to_string(),
            content: "Yaklaşan üniversite sınavım için başarılı olabilmem için dua \
                      edin lütfen."
                .to_string(),
            category: "Eğitim".to_string(),
            is_urgent: true,
            prayers: CountedFlag::new(true, 67),
            comments: 8,
            is_bookmarked: false,
            tags: vec!["sınav".to_string(), "üniversite".to_string()],
            created_at: now - Duration::hours(3),
        },
    ]
}

pub fn sample_explore_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: ContentId::from("explore-1"),
            author: PostAuthor {
                name: "Dr. Ahmet Yılmaz".to_string(),
                avatar_url: None,
                verified: true,
            },
            content: "Sabah namazının ruha verdiği huzur tarif edilemez. Her gün yeni \
                      bir başlangıç, her secde bir tevekkül..."
                .to_string(),
            kind: PostKind::Text,
            media_url: None,
            category: "İbadet".to_string(),
            tags: vec![
                "sabah namazı".to_string(),
                "ibadet".to_string(),
                "huzur".to_string(),
            ],
            likes: CountedFlag::new(false, 1247),
            comments: 89,
            shares: 156,
            is_bookmarked: true,
            created_at: now - Duration::hours(3),
        },
        Post {
            id: ContentId::from("explore-2"),
            author: PostAuthor {
                name: "Fatma Özkan".to_string(),
                avatar_url: None,
                verified: true,
            },
            content: "Süleymaniye Camii'nde çektiğim bu fotoğraf... İslam mimarisinin \
                      zarafeti ve ihtişamı."
                .to_string(),
            kind: PostKind::Image,
            media_url: Some("https://images.example.com/suleymaniye.jpeg".to_string()),
            category: "Sanat".to_string(),
            tags: vec!["mimari".to_string(), "cami".to_string(), "sanat".to_string()],
            likes: CountedFlag::new(true, 2156),
            comments: 134,
            shares: 267,
            is_bookmarked: false,
            created_at: now - Duration::hours(5),
        },
        Post {
            id: ContentId::from("explore-3"),
            author: PostAuthor {
                name: "Hafız Mehmet Demir".to_string(),
                avatar_url: None,
                verified: true,
            },
            content: "Hz. Peygamber (s.a.v) buyurdu: \"Mümin kardeşinin yüzüne \
                      gülümsemen sadakadır.\""
                .to_string(),
            kind: PostKind::Text,
            media_url: None,
            category: "Hadis".to_string(),
            tags: vec!["hadis".to_string(), "sadaka".to_string()],
            likes: CountedFlag::new(false, 1834),
            comments: 156,
            shares: 234,
            is_bookmarked: true,
            created_at: now - Duration::days(1),
        },
    ]
}

pub fn sample_verses() -> Vec<Verse> {
    vec![
        Verse {
            id: ContentId::from("verse-1"),
            surah_name: "Bakara".to_string(),
            surah_number: 2,
            verse_number: 45,
            text_arabic: "وَاسْتَعِينُوا بِالصَّبْرِ وَالصَّلَاةِ".to_string(),
            text: "Sabır ve namazla (Allah'tan) yardım dileyin.".to_string(),
            transliteration: Some("Wasta'īnū biṣ-ṣabri waṣ-ṣalāti".to_string()),
            category: "İbadet".to_string(),
            likes: CountedFlag::new(false, 234),
            is_bookmarked: true,
        },
        Verse {
            id: ContentId::from("verse-2"),
            surah_name: "İsra".to_string(),
            surah_number: 17,
            verse_number: 23,
            text_arabic: "وَقَضَىٰ رَبُّكَ أَلَّا تَعْبُدُوا إِلَّا إِيَّاهُ".to_string(),
            text: "Rabbin, yalnız kendisine kulluk etmenizi ve anne-babanıza iyilik \
                   yapmanızı emretti."
                .to_string(),
            transliteration: None,
            category: "Ahlak".to_string(),
            likes: CountedFlag::new(true, 189),
            is_bookmarked: false,
        },
    ]
}

pub fn sample_hadiths() -> Vec<Hadith> {
    vec![
        Hadith {
            id: ContentId::from("hadith-1"),
            source_name: "Buhari".to_string(),
            source_book: "Sahih-i Buhari".to_string(),
            source_number: "6018".to_string(),
            text_arabic: "إِنَّمَا بُعِثْتُ لِأُتَمِّمَ مَكَارِمَ الْأَخْلَاقِ".to_string(),
            text: "Ben ancak güzel ahlakı tamamlamak için gönderildim.".to_string(),
            narrator: "Ebu Hureyre (r.a.)".to_string(),
            category: "Ahlak".to_string(),
            authenticity: Authenticity::Sahih,
            likes: CountedFlag::new(false, 156),
            is_bookmarked: true,
        },
        Hadith {
            id: ContentId::from("hadith-2"),
            source_name: "Müslim".to_string(),
            source_book: "Sahih-i Müslim".to_string(),
            source_number: "2564".to_string(),
            text_arabic: "الْمُؤْمِنُ الَّذِي يُخَالِطُ النَّاسَ وَيَصْبِرُ عَلَى أَذَاهُمْ".to_string(),
            text: "İnsanlarla kaynaşan ve onların eziyetlerine sabreden mümin daha \
                   hayırlıdır."
                .to_string(),
            narrator: "İbn Ömer (r.a.)".to_string(),
            category: "Sosyal İlişkiler".to_string(),
            authenticity: Authenticity::Sahih,
            likes: CountedFlag::new(true, 98),
            is_bookmarked: false,
        },
    ]
}

pub fn sample_wisdom() -> Vec<WisdomEntry> {
    vec![
        WisdomEntry {
            id: ContentId::from("wisdom-1"),
            kind: WisdomKind::Verse,
            text: "وَمَن يَتَوَكَّلْ عَلَى اللَّهِ فَهُوَ حَسْبُهُ".to_string(),
            translation: "Kim Allah'a tevekkül ederse, O kendisine yeter.".to_string(),
            source: "Talak 65:3".to_string(),
            category: "Tevekkül".to_string(),
            likes: CountedFlag::new(false, 312),
            is_bookmarked: false,
        },
        WisdomEntry {
            id: ContentId::from("wisdom-2"),
            kind: WisdomKind::Hadith,
            text: "İnsanların en hayırlısı, insanlara en faydalı olandır.".to_string(),
            translation: "İnsanların en hayırlısı, insanlara en faydalı olandır."
                .to_string(),
            source: "Taberânî".to_string(),
            category: "Ahlak".to_string(),
            likes: CountedFlag::new(true, 198),
            is_bookmarked: true,
        },
        WisdomEntry {
            id: ContentId::from("wisdom-3"),
            kind: WisdomKind::Quote,
            text: "Sabır, imanın yarısıdır.".to_string(),
            translation: "Sabır, imanın yarısıdır.".to_string(),
            source: "İbn Mes'ud".to_string(),
            category: "Sabır".to_string(),
            likes: CountedFlag::new(false, 140),
            is_bookmarked: false,
        },
    ]
}
