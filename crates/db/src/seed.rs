//! Sample volumes loaded at startup so a fresh instance has content to show.

use chrono::{Duration, Utc};

use crate::models::{CreateVolume, Volume};
use crate::store::AnthologyStore;
use crate::StoreError;

/// Insert the three launch volumes. Vol. III is current; the others were
/// released two and three weeks earlier.
pub async fn seed_sample_volumes(store: &dyn AnthologyStore) -> Result<Vec<Volume>, StoreError> {
    let now = Utc::now();

    let samples = [
        CreateVolume {
            title: "Vol. III \u{2014} The Mirror Month".to_string(),
            volume_number: 3,
            poem_content: "In the mirror of morning light,\n\
                           I see not what I think I am,\n\
                           but what I've always been,\n\
                           a question learning to love\n\
                           its own uncertainty..."
                .to_string(),
            reflection_prompt: "What face do you see when no one is watching? \
                                What truth emerges when the performance ends?"
                .to_string(),
            soundscape_url: Some(
                "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav".to_string(),
            ),
            soundscape_title: Some(
                "Forest Dawn \u{2014} 20 minutes of gentle bird songs and rustling leaves"
                    .to_string(),
            ),
            release_date: Some(now),
            is_current: Some(true),
        },
        CreateVolume {
            title: "Vol. II \u{2014} The Seed Beneath".to_string(),
            volume_number: 2,
            poem_content: "Beneath the frost of winter's grip,\n\
                           a seed waits in darkness,\n\
                           holding the memory of light\n\
                           it has never seen."
                .to_string(),
            reflection_prompt: "What seeds of potential lie dormant within you? \
                                What conditions would help them sprout?"
                .to_string(),
            soundscape_url: None,
            soundscape_title: None,
            release_date: Some(now - Duration::days(14)),
            is_current: Some(false),
        },
        CreateVolume {
            title: "Vol. I \u{2014} The Threshold".to_string(),
            volume_number: 1,
            poem_content: "Every door is also a choice.\n\
                           Every choice, a small death\n\
                           of the person you were\n\
                           a moment before."
                .to_string(),
            reflection_prompt: "Every beginning is a crossing. \
                                What do you leave behind? What do you carry forward?"
                .to_string(),
            soundscape_url: None,
            soundscape_title: None,
            release_date: Some(now - Duration::days(21)),
            is_current: Some(false),
        },
    ];

    let mut created = Vec::with_capacity(samples.len());
    for sample in samples {
        created.push(store.create_volume(sample).await?);
    }

    tracing::info!(count = created.len(), "Seeded sample volumes");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemStore;

    #[tokio::test]
    async fn seeds_three_volumes_with_one_current() {
        let store = MemStore::new();
        seed_sample_volumes(&store).await.unwrap();

        let volumes = store.list_volumes().await.unwrap();
        let numbers: Vec<i32> = volumes.iter().map(|v| v.volume_number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);

        let current = store.get_current_volume().await.unwrap().unwrap();
        assert_eq!(current.volume_number, 3);
        assert!(current.soundscape_url.is_some());
    }

    #[tokio::test]
    async fn samples_pass_validation() {
        let store = MemStore::new();
        for volume in seed_sample_volumes(&store).await.unwrap() {
            let dto = CreateVolume {
                title: volume.title,
                volume_number: volume.volume_number,
                poem_content: volume.poem_content,
                reflection_prompt: volume.reflection_prompt,
                soundscape_url: volume.soundscape_url,
                soundscape_title: volume.soundscape_title,
                release_date: Some(volume.release_date),
                is_current: Some(volume.is_current),
            };
            assert!(anthology_core::validation::validate(&dto).is_ok());
        }
    }
}
