/*!
 * Deprecation Reporter
 * Cross-references bound signals against the legacy replacement table
 */

use crate::types::SignalKey;

/// One legacy signal and the event that supersedes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedSignal {
    pub source: &'static str,
    pub signal: &'static str,
    pub replacement: &'static str,
}

/// Legacy signals with a modern replacement event.
///
/// Covers the file index, metadata, resource storage and file processing
/// signals of the host's storage layer.
pub static DEPRECATED_SIGNALS: &[DeprecatedSignal] = &[
    DeprecatedSignal {
        source: "storage::FileIndexRepository",
        signal: "recordUpdated",
        replacement: "AfterFileUpdatedInIndexEvent",
    },
    DeprecatedSignal {
        source: "storage::FileIndexRepository",
        signal: "recordCreated",
        replacement: "AfterFileAddedToIndexEvent",
    },
    DeprecatedSignal {
        source: "storage::FileIndexRepository",
        signal: "recordDeleted",
        replacement: "AfterFileRemovedFromIndexEvent",
    },
    DeprecatedSignal {
        source: "storage::FileIndexRepository",
        signal: "recordMarkedAsMissing",
        replacement: "AfterFileMarkedAsMissingEvent",
    },
    DeprecatedSignal {
        source: "storage::MetaDataRepository",
        signal: "recordPostRetrieval",
        replacement: "EnrichFileMetaDataEvent",
    },
    DeprecatedSignal {
        source: "storage::MetaDataRepository",
        signal: "recordUpdated",
        replacement: "AfterFileMetaDataUpdatedEvent",
    },
    DeprecatedSignal {
        source: "storage::MetaDataRepository",
        signal: "recordCreated",
        replacement: "AfterFileMetaDataCreatedEvent",
    },
    DeprecatedSignal {
        source: "storage::MetaDataRepository",
        signal: "recordDeleted",
        replacement: "AfterFileMetaDataDeletedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceFactory",
        signal: "preProcessStorage",
        replacement: "BeforeResourceStorageInitializationEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceFactory",
        signal: "postProcessStorage",
        replacement: "AfterResourceStorageInitializationEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "sanitizeFileName",
        replacement: "SanitizeFileNameEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileAdd",
        replacement: "BeforeFileAddedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileAdd",
        replacement: "AfterFileAddedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileCopy",
        replacement: "BeforeFileCopiedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileCopy",
        replacement: "AfterFileCopiedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileMove",
        replacement: "BeforeFileMovedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileMove",
        replacement: "AfterFileMovedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileRename",
        replacement: "BeforeFileRenamedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileRename",
        replacement: "AfterFileRenamedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileReplace",
        replacement: "BeforeFileReplacedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileReplace",
        replacement: "AfterFileReplacedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileCreate",
        replacement: "BeforeFileCreatedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileCreate",
        replacement: "AfterFileCreatedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileDelete",
        replacement: "BeforeFileDeletedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileDelete",
        replacement: "AfterFileDeletedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFileSetContents",
        replacement: "BeforeFileContentsSetEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFileSetContents",
        replacement: "AfterFileContentsSetEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFolderAdd",
        replacement: "BeforeFolderAddedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFolderAdd",
        replacement: "AfterFolderAddedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFolderCopy",
        replacement: "BeforeFolderCopiedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFolderCopy",
        replacement: "AfterFolderCopiedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFolderMove",
        replacement: "BeforeFolderMovedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFolderMove",
        replacement: "AfterFolderMovedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFolderRename",
        replacement: "BeforeFolderRenamedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFolderRename",
        replacement: "AfterFolderRenamedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preFolderDelete",
        replacement: "BeforeFolderDeletedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "postFolderDelete",
        replacement: "AfterFolderDeletedEvent",
    },
    DeprecatedSignal {
        source: "storage::ResourceStorage",
        signal: "preGeneratePublicUrl",
        replacement: "GeneratePublicUrlForResourceEvent",
    },
    DeprecatedSignal {
        source: "storage::FileProcessingService",
        signal: "preFileProcess",
        replacement: "BeforeFileProcessingEvent",
    },
    DeprecatedSignal {
        source: "storage::FileProcessingService",
        signal: "postFileProcess",
        replacement: "AfterFileProcessingEvent",
    },
];

/// Look up the replacement event for a signal identity
pub fn replacement_for(
    table: &'static [DeprecatedSignal],
    source: &str,
    signal: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|entry| entry.source == source && entry.signal == signal)
        .map(|entry| entry.replacement)
}

/// Collect one warning line per bound signal present in the table.
///
/// Pure message assembly; emission is the dispatcher's concern. Lines are
/// sorted by signal identity so the batched warning is deterministic.
pub fn collect_messages(
    table: &'static [DeprecatedSignal],
    bound_keys: impl IntoIterator<Item = SignalKey>,
) -> Vec<String> {
    let mut keys: Vec<SignalKey> = bound_keys.into_iter().collect();
    keys.sort_by(|a, b| (&a.source, &a.signal).cmp(&(&b.source, &b.signal)));
    keys.iter()
        .filter_map(|key| {
            replacement_for(table, &key.source, &key.signal).map(|replacement| {
                format!(
                    "The signal \"{}\" in \"{}\" is deprecated and scheduled for removal. Use the replacement event \"{}\" instead.",
                    key.signal, key.source, replacement
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_TABLE: &[DeprecatedSignal] = &[
        DeprecatedSignal {
            source: "A",
            signal: "one",
            replacement: "OneEvent",
        },
        DeprecatedSignal {
            source: "B",
            signal: "two",
            replacement: "TwoEvent",
        },
    ];

    #[test]
    fn test_replacement_lookup() {
        assert_eq!(replacement_for(TEST_TABLE, "A", "one"), Some("OneEvent"));
        assert_eq!(replacement_for(TEST_TABLE, "A", "two"), None);
        assert_eq!(replacement_for(TEST_TABLE, "C", "one"), None);
    }

    #[test]
    fn test_builtin_table_lookup() {
        assert_eq!(
            replacement_for(DEPRECATED_SIGNALS, "storage::ResourceStorage", "preFileAdd"),
            Some("BeforeFileAddedEvent")
        );
        assert_eq!(
            replacement_for(DEPRECATED_SIGNALS, "storage::ResourceStorage", "unknown"),
            None
        );
    }

    #[test]
    fn test_collect_messages_filters_and_sorts() {
        let keys = vec![
            SignalKey::new("B", "two"),
            SignalKey::new("Unrelated", "signal"),
            SignalKey::new("A", "one"),
        ];
        let messages = collect_messages(TEST_TABLE, keys);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("OneEvent"));
        assert!(messages[1].contains("TwoEvent"));
    }

    #[test]
    fn test_collect_messages_empty_without_deprecated_keys() {
        let keys = vec![SignalKey::new("Unrelated", "signal")];
        assert!(collect_messages(TEST_TABLE, keys).is_empty());
    }
}
